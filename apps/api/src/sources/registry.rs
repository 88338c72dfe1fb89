use std::collections::BTreeMap;
use std::sync::Arc;

use crate::models::listing::Platform;
use crate::sources::platforms::{
    GlassdoorSource, HelloWorkSource, IndeedSource, JobTeaserSource, LinkedInSource,
    WelcomeToTheJungleSource,
};
use crate::sources::{ListingSource, SourceError};

/// Builds a fresh adapter for one platform.
pub type SourceConstructor = fn() -> Arc<dyn ListingSource>;

fn construct<S: ListingSource + Default + 'static>() -> Arc<dyn ListingSource> {
    Arc::new(S::default())
}

/// Maps platform keys to adapter constructors.
#[derive(Clone, Default)]
pub struct SourceRegistry {
    constructors: BTreeMap<Platform, SourceConstructor>,
}

impl SourceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every built-in adapter.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry
            .register(Platform::Linkedin, construct::<LinkedInSource>)
            .register(Platform::Indeed, construct::<IndeedSource>)
            .register(Platform::Glassdoor, construct::<GlassdoorSource>)
            .register(Platform::HelloWork, construct::<HelloWorkSource>)
            .register(Platform::JobTeaser, construct::<JobTeaserSource>)
            .register(
                Platform::WelcomeToTheJungle,
                construct::<WelcomeToTheJungleSource>,
            );
        registry
    }

    /// Adds or replaces the constructor for `platform`.
    pub fn register(&mut self, platform: Platform, constructor: SourceConstructor) -> &mut Self {
        self.constructors.insert(platform, constructor);
        self
    }

    /// Creates the adapter for a platform key (case-insensitive).
    pub fn create(&self, key: &str) -> Result<Arc<dyn ListingSource>, SourceError> {
        key.parse::<Platform>()
            .ok()
            .and_then(|platform| self.constructors.get(&platform))
            .map(|constructor| constructor())
            .ok_or_else(|| SourceError::UnsupportedPlatform {
                requested: key.to_string(),
                supported: self.supported_keys().join(", "),
            })
    }

    /// Creates one adapter per distinct key, in first-seen order.
    /// Fails on the first unsupported key so no partial fan-out starts.
    pub fn create_all<S: AsRef<str>>(
        &self,
        keys: &[S],
    ) -> Result<Vec<Arc<dyn ListingSource>>, SourceError> {
        let mut seen = Vec::new();
        let mut sources = Vec::new();
        for key in keys {
            let source = self.create(key.as_ref())?;
            if !seen.contains(&source.platform()) {
                seen.push(source.platform());
                sources.push(source);
            }
        }
        Ok(sources)
    }

    pub fn supported_platforms(&self) -> Vec<Platform> {
        self.constructors.keys().copied().collect()
    }

    pub fn is_supported(&self, key: &str) -> bool {
        key.parse::<Platform>()
            .is_ok_and(|platform| self.constructors.contains_key(&platform))
    }

    fn supported_keys(&self) -> Vec<&'static str> {
        self.constructors.keys().map(Platform::as_str).collect()
    }
}
