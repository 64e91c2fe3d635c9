pub mod ask;
pub mod doctor;
pub mod lessons;
pub mod serve;
