
pub mod linear_view;

pub use self::linear_view::LinearView;
