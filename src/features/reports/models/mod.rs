mod report;
mod report_image;
mod report_location;

pub use report::{Report, ReportCategory, ReportStatus, UserSnapshot};
pub use report_image::{ImageMetadata, ReportImage};
pub use report_location::ReportLocation;
