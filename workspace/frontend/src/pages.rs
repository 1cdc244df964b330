pub mod grade_predictor;
pub mod how_we_predict;
