//! Per-resource service handles.
//!
//! Each service borrows the shared client internals and exposes the
//! operations for one resource family. They are obtained from the
//! accessor methods on [`OnfidoClient`](crate::OnfidoClient), e.g.
//! `client.applicants().create(..)`.

mod addresses;
mod applicants;
mod checks;
mod documents;
mod live_photos;
mod reports;
mod sdk_tokens;
mod webhooks;

pub use addresses::AddressesService;
pub use applicants::ApplicantsService;
pub use checks::ChecksService;
pub use documents::DocumentsService;
pub use live_photos::LivePhotosService;
pub use reports::ReportsService;
pub use sdk_tokens::SdkTokensService;
pub use webhooks::WebhooksService;
