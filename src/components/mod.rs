//! UI Components for imageclass.

mod alert;
pub mod images;
mod result_card;
mod upload_widget;

pub use result_card::ResultCard;
pub use upload_widget::UploadWidgetView;
