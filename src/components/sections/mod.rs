//! Content sections revealed after the cover opens, in page order.

mod closing;
mod couple;
mod events;
mod footer;
mod gallery;
mod invitees;
mod location;
mod opening;

pub use closing::ClosingSection;
pub use couple::CoupleSection;
pub use events::{AkadSection, ReceptionSection};
pub use footer::Footer;
pub use gallery::GallerySection;
pub use invitees::InviteesSection;
pub use location::LocationSection;
pub use opening::OpeningSection;
