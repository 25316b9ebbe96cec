/// Mock implementations for testing
mod mock_document_reader;
mod mock_report_presenter;

pub use mock_document_reader::MockDocumentReader;
pub use mock_report_presenter::MockReportPresenter;
