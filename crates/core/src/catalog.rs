//! The parameter catalog: which parameters and flags to offer per image.
//!
//! A [`Catalog`] is an explicit value handed to [`crate::model::Model`]
//! construction, so tests and config files can supply their own entries.

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use indexmap::IndexMap;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_PROGRAM;
use crate::error::{Error, Result};
use crate::parameters::{ParameterInstance, ParameterKind, RunFlag};

/// Parameters and flags offered for one image or profile.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageProfile {
    #[serde(default)]
    pub flags: Vec<RunFlag>,
    #[serde(default)]
    pub parameters: Vec<ParameterInstance>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    /// The invocation the assembled command starts with.
    #[serde(default = "default_program")]
    pub program: String,
    #[serde(default)]
    pub images: IndexMap<String, ImageProfile>,
}

fn default_program() -> String {
    DEFAULT_PROGRAM.to_string()
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            program: default_program(),
            images: IndexMap::new(),
        }
    }
}

impl Catalog {
    /// The catalog used when no catalog file is configured.
    #[must_use]
    pub fn builtin() -> Self {
        let mut images = IndexMap::new();

        images.insert(
            "alpine".to_string(),
            ImageProfile {
                flags: vec![RunFlag::Interactive, RunFlag::Tty],
                parameters: vec![
                    ParameterInstance::new(ParameterKind::Name, ["alpine-test", "evenCoolerName"]),
                    ParameterInstance::new(ParameterKind::Port, ["8080:80"]),
                    ParameterInstance::new(ParameterKind::Entrypoint, ["/bin/ash"]),
                ],
            },
        );

        images.insert(
            "postgres".to_string(),
            ImageProfile {
                flags: vec![RunFlag::Detach],
                parameters: vec![
                    ParameterInstance::new(ParameterKind::Name, ["postgresDB", "evenCoolerName"]),
                    ParameterInstance::new(ParameterKind::Port, ["5432:5432"]),
                    ParameterInstance::new(
                        ParameterKind::Volume,
                        [
                            "postgres-data:/some/other/container/dir",
                            "/yet/another/local/dir:/yet/another/container/dir",
                        ],
                    ),
                    ParameterInstance::new(ParameterKind::Env, ["POSTGRES_USER=test-user"]),
                    ParameterInstance::new(ParameterKind::Env, ["POSTGRES_PASSWORD=test-password"]),
                    ParameterInstance::new(ParameterKind::Env, ["POSTGRES_DB=test-db"]),
                ],
            },
        );

        Self {
            program: default_program(),
            images,
        }
    }

    /// Returns the profile for `image`, or an empty profile if it is unknown.
    #[must_use]
    pub fn profile(&self, image: &str) -> ImageProfile {
        if let Some(profile) = self.images.get(image) {
            debug!(
                "Catalog entry for `{image}`: {} parameters, {} flags",
                profile.parameters.len(),
                profile.flags.len()
            );
            return profile.clone();
        }

        match self.closest_profile(image) {
            Some(closest) => warn!("No catalog entry for `{image}`. Did you mean `{closest}`?"),
            None => warn!("No catalog entry for `{image}`, no parameters will be offered."),
        }

        ImageProfile::default()
    }

    /// Finds the known profile name that best matches `image`, in either direction.
    #[must_use]
    pub fn closest_profile(&self, image: &str) -> Option<&str> {
        let matcher = SkimMatcherV2::default();

        self.images
            .keys()
            .filter_map(|known| {
                matcher
                    .fuzzy_match(known, image)
                    .or_else(|| matcher.fuzzy_match(image, known))
                    .map(|score| (score, known.as_str()))
            })
            .max_by_key(|(score, _)| *score)
            .map(|(_, known)| known)
    }

    /// Checks that every offered parameter has at least one candidate.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyProfileName`] for a blank image name and
    /// [`Error::EmptyCandidates`] for a parameter without candidates.
    pub fn validate(&self) -> Result<()> {
        for (image, profile) in &self.images {
            if image.trim().is_empty() {
                return Err(Error::EmptyProfileName);
            }

            if let Some(param) = profile.parameters.iter().find(|p| p.candidates.is_empty()) {
                return Err(Error::EmptyCandidates {
                    image: image.clone(),
                    flag: param.kind.flag().to_string(),
                });
            }
        }

        Ok(())
    }
}
