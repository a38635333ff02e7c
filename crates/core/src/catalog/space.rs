use crate::model::{Category, Fact, FactId};

fn fact(number: u32, text: &str, source: &str) -> Fact {
    Fact::new(
        FactId::new(format!("space-{number}")),
        Category::Space,
        text,
        source,
        number,
    )
}

pub(super) fn facts() -> Vec<Fact> {
    vec![
        fact(
            1,
            "A day on Venus is longer than its year: Venus takes 243 Earth days to rotate once but only 225 to orbit the Sun — and it spins backwards.",
            "NASA",
        )
        .with_source_url("https://science.nasa.gov/venus/venus-facts/"),
        fact(
            2,
            "There are more stars in the observable universe than grains of sand on all of Earth's beaches — on the order of 10²² stars.",
            "ESA",
        ),
        fact(
            3,
            "Saturn is less dense than water: given a big enough bathtub, the planet would float.",
            "NASA",
        ),
        fact(
            4,
            "The footprints on the Moon will last millions of years. With no wind or water, only micrometeorite rain slowly erases them.",
            "Lunar Reconnaissance Orbiter, NASA",
        ),
        fact(
            5,
            "Jupiter's Great Red Spot is a storm larger than Earth that has raged for at least 190 years — and possibly more than 350.",
            "NASA Juno Mission",
        ),
        fact(
            6,
            "Neutron stars can spin 700 times per second. A teaspoon of their surface material would outweigh Mount Everest.",
            "NASA Goddard Space Flight Center",
        ),
        fact(
            7,
            "On Mars, sunsets are blue. Fine dust scatters red light across the sky and lets blue light linger around the setting sun.",
            "NASA Jet Propulsion Laboratory",
        ),
        fact(
            8,
            "The International Space Station travels at 28,000 km/h, circling Earth every 90 minutes — astronauts aboard see 16 sunrises a day.",
            "NASA",
        ),
        fact(
            9,
            "Olympus Mons on Mars is the tallest volcano in the solar system, nearly three times the height of Everest and roughly the size of France.",
            "ESA Mars Express",
        ),
        fact(
            10,
            "Voyager 1, launched in 1977, is the most distant human-made object — over 24 billion kilometers away and still phoning home on 23 watts.",
            "NASA Jet Propulsion Laboratory",
        ),
    ]
}
