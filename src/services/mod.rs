// Service module exports

pub mod schedule;
