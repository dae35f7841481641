/// Machine Translation Boundary
///
/// This module wraps the external, untrusted translation step for the
/// tag-protection pipeline. The protection core (`protect`, `restore`,
/// `restore_locally`) is pure and synchronous; everything async and fallible
/// lives here:
///
/// 1. **MT Trait & Providers** - Generic trait for MT systems with a
///    LibreTranslate implementation and a deterministic mock
/// 2. **Pipeline** - protect → translate → restore, with the heuristic
///    recoverer as a safety net when the boundary swallows markup
/// 3. **Errors** - configuration/network/provider failures; tag loss is
///    never an error, it is reported as data on the pipeline result
pub mod error;
pub mod libretranslate;
pub mod mock;
pub mod pipeline;
pub mod translator;


pub use error::{MtError, MtResult};
pub use libretranslate::LibreTranslateProvider;
pub use mock::{MockMode, MockTranslator};
pub use pipeline::{ProtectedTranslation, translate_protected, translate_store};
pub use translator::{MachineTranslator, normalize_locale, validate_locale};
