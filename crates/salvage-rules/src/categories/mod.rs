pub mod arterial;
pub mod comorbidities;
pub mod demographics;
pub mod osteomyelitis;
pub mod renal;
pub mod sepsis;
pub mod wagner;
pub mod wifi;
