/// Console adapters for rendering reports to the terminal
mod report_presenter;

pub use report_presenter::ConsoleReportPresenter;
