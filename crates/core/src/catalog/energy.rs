use crate::model::{Category, Fact, FactId};

fn fact(number: u32, text: &str, source: &str) -> Fact {
    Fact::new(
        FactId::new(format!("energy-{number}")),
        Category::Energy,
        text,
        source,
        number,
    )
}

pub(super) fn facts() -> Vec<Fact> {
    vec![
        fact(
            1,
            "Enough sunlight hits the Earth in about 90 minutes to power the entire world for a year.",
            "U.S. Department of Energy",
        )
        .with_source_url("https://www.energy.gov/eere/solar/how-does-solar-work"),
        fact(
            2,
            "A single bolt of lightning carries roughly five billion joules — enough energy to toast around 100,000 slices of bread.",
            "Met Office",
        ),
        fact(
            3,
            "The first electric grid, built by Edison in 1882, served 82 customers in Manhattan from a coal plant on Pearl Street.",
            "IEEE Spectrum",
        ),
        fact(
            4,
            "Iceland generates nearly 100% of its electricity from renewable sources — roughly 70% hydropower and 30% geothermal.",
            "Government of Iceland",
        ),
        fact(
            5,
            "One uranium fuel pellet the size of a fingertip contains as much energy as a ton of coal or 149 gallons of oil.",
            "U.S. Nuclear Energy Institute",
        ),
        fact(
            6,
            "Wind turbines can be taller than the Eiffel Tower's second floor: the largest offshore turbines sweep an area bigger than seven football fields with a single rotation.",
            "GE Vernova",
        ),
        fact(
            7,
            "The human body at rest radiates about 100 watts — roughly the output of an old incandescent light bulb.",
            "Vanderbilt University",
        ),
        fact(
            8,
            "Pumped-storage hydropower is the world's largest battery: off-peak electricity pumps water uphill, and the reservoir releases it through turbines when demand spikes.",
            "International Hydropower Association",
        ),
        fact(
            9,
            "The fusion reactions in the Sun's core convert four million tons of matter into pure energy every second.",
            "NASA",
        ),
        fact(
            10,
            "Norway's electric vehicles outnumber petrol cars among new sales: in 2023, more than 80% of new cars sold were fully electric.",
            "Norwegian Road Federation",
        ),
    ]
}
