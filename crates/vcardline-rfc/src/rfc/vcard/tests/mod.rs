//! vCard 4.0 test fixtures and read/write tests.

mod round_trip;
