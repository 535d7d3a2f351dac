mod config_driven;
mod full_report;
