pub mod view;

pub use view::DashboardPage;
