use pacer::{DistanceUnit, Pace, TimeUnit};

fn main() {
    // 10 km in 50 minutes.
    let mut pace = Pace::with_units(10.0, 50.0, DistanceUnit::Kilometer, TimeUnit::Minute);
    println!("pace: {pace}");
    println!("clock: {} per km", pace.clock_string());

    pace.format(DistanceUnit::Mile, TimeUnit::Minute);
    println!("pace: {pace}");
    println!("clock: {} per mi", pace.clock_string());
}
