pub mod app_view;
pub mod forecast_list;
pub mod location_input;
pub mod notice;
pub mod weather_card;

// Re-export core Component trait
pub use tui_dispatch::Component;

pub use app_view::{AppView, AppViewProps, ERROR_ICON};
pub use forecast_list::{ForecastList, ForecastListProps};
pub use location_input::{LocationInput, LocationInputProps};
pub use notice::{Notice, NoticeProps};
pub use weather_card::{WeatherCard, WeatherCardProps};
