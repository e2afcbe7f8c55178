pub mod use_cases;

pub use use_cases::copy_affordance::copy_affordance;
pub use use_cases::csv_importer::CsvImporter;
pub use use_cases::property_mapper::map_row_to_property;
pub use use_cases::row_aggregator::map_csv_to_properties;
pub use use_cases::row_validator::validate;
