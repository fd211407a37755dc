//! Hardware and presentation abstraction traits

mod ui;

pub use ui::UiPresenter;
