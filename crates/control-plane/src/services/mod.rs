// Services layer for business logic
// Services orchestrate the core (assembly, enrichment) over a FormStore

pub mod form;
pub mod status;

pub use form::FormService;
pub use status::StatusService;
