pub mod worked;
