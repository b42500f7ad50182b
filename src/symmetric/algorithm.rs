//! Registry mapping (method, mode) pairs to the algorithm names the crypto
//! engine recognizes.

use crate::{
    engine,
    error::{KryptaError, Result},
    symmetric::{CipherMethod, CipherMode},
};

/// Engine-recognized token identifying a concrete cipher configuration,
/// e.g. `des-ede3-cbc`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AlgorithmId(String);

impl AlgorithmId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AlgorithmId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Resolves a (method, mode) pair to its [`AlgorithmId`] per the engine
/// naming convention. Pure string building, no engine call.
///
/// DESX only exists in its CBC form, so every mode maps to the same id
/// there. May fail with [`KryptaError::UnsupportedConfiguration`] for
/// pairings the engine has no name for.
pub fn resolve(method: CipherMethod, mode: CipherMode) -> Result<AlgorithmId> {
    let name = match (method, mode) {
        // DESX has no mode distinction, the mode argument is accepted for
        // API uniformity only
        (CipherMethod::DesX, _) => "desx-cbc".to_string(),
        (CipherMethod::DesTriple2Key | CipherMethod::DesTriple3Key, CipherMode::Ecb) => {
            // the bare EDE names are the ECB variants
            method.token().to_string()
        }
        (
            CipherMethod::DesSimple | CipherMethod::DesTriple2Key | CipherMethod::DesTriple3Key,
            CipherMode::Ctr,
        ) => {
            return Err(KryptaError::UnsupportedConfiguration(format!(
                "mode {mode:?} is not defined for method {method:?}"
            )))
        }
        (method, mode) => format!("{}-{}", method.token(), mode.token()),
    };

    Ok(AlgorithmId(name))
}

/// Asks the running engine build whether it can instantiate the algorithm.
/// Queried fresh on every call, availability is external state.
pub fn is_available(algorithm: &AlgorithmId) -> bool {
    engine::is_available(algorithm.as_str())
}
