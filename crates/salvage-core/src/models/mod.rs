pub mod comorbidities;
pub mod demographics;
pub mod grades;
pub mod input;
pub mod osteomyelitis;
pub mod renal;
pub mod result;
pub mod sepsis;
pub mod stored;
pub mod summary;
pub mod vascular;
pub mod wound;
