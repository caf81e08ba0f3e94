pub mod daily_sample;
