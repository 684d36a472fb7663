pub mod calendar;
pub mod city;
pub mod dataset;
pub mod trip;

pub use calendar::{Calendar, DaySelector, MonthSelector};
pub use city::{City, CityCatalog};
pub use dataset::{Dataset, OptionalColumn, OptionalColumns};
pub use trip::Trip;
