pub mod sheet_layout;

pub use sheet_layout::SheetLayout;
