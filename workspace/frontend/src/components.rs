pub mod combobox;
pub mod disclaimer;
pub mod prediction_result;
pub mod year_select;
