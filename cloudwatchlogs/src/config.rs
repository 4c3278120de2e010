/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

/// Service configuration
///
/// Values set here are recorded in the property bag of every operation built with it.
pub struct Config {
    pub(crate) region: std::option::Option<aws_types::region::Region>,
}
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut config = f.debug_struct("Config");
        config.field("region", &self.region);
        config.finish()
    }
}
impl Config {
    pub fn builder() -> Builder {
        Builder::default()
    }
    /// Loads the region from `AWS_REGION`, then `AWS_DEFAULT_REGION`
    pub fn from_env() -> Self {
        Builder::default()
            .region(aws_types::region::default_provider())
            .build()
    }
    pub fn region(&self) -> std::option::Option<&aws_types::region::Region> {
        self.region.as_ref()
    }
}

#[derive(Default)]
pub struct Builder {
    region: std::option::Option<aws_types::region::Region>,
}
impl Builder {
    pub fn new() -> Self {
        Self::default()
    }
    /// Resolves the region from `region_provider` immediately
    pub fn region(mut self, region_provider: impl aws_types::region::ProvideRegion) -> Self {
        self.region = region_provider.region();
        self
    }
    pub fn set_region(mut self, region: std::option::Option<aws_types::region::Region>) -> Self {
        self.region = region;
        self
    }
    pub fn build(self) -> Config {
        Config {
            region: self.region,
        }
    }
}

#[cfg(test)]
mod test {
    use super::Config;
    use aws_types::os_shim_internal::Env;
    use aws_types::region::{EnvironmentProvider, Region};

    #[test]
    fn region_from_builder() {
        let config = Config::builder().region(Region::new("us-west-2")).build();
        assert_eq!(config.region(), Some(&Region::new("us-west-2")));

        let config = Config::builder()
            .region(Region::new("us-west-2"))
            .set_region(None)
            .build();
        assert_eq!(config.region(), None);
    }

    #[test]
    fn region_from_environment_provider() {
        let config = Config::builder()
            .region(EnvironmentProvider::from_env(Env::from_slice(&[(
                "AWS_DEFAULT_REGION",
                "eu-central-1",
            )])))
            .build();
        assert_eq!(config.region(), Some(&Region::new("eu-central-1")));
        assert!(format!("{:?}", config).contains("eu-central-1"));
    }
}
