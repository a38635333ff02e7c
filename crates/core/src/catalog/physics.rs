use crate::model::{Category, Fact, FactId};

fn fact(number: u32, text: &str, source: &str) -> Fact {
    Fact::new(
        FactId::new(format!("physics-{number}")),
        Category::Physics,
        text,
        source,
        number,
    )
}

pub(super) fn facts() -> Vec<Fact> {
    vec![
        fact(
            1,
            "Time runs faster at your head than at your feet. Optical clocks can now measure this gravitational time dilation over a height difference of a single millimeter.",
            "NIST",
        )
        .with_source_url("https://www.nist.gov/news-events/news/2022/02/jila-atomic-clocks-measure-einsteins-general-relativity-millimeter-scale"),
        fact(
            2,
            "If an atom were the size of a cathedral, its nucleus would be the size of a fly — atoms are overwhelmingly empty space.",
            "CERN",
        ),
        fact(
            3,
            "Light from the Sun's core takes up to 100,000 years to random-walk to the surface, then just over eight minutes to reach Earth.",
            "NASA",
        ),
        fact(
            4,
            "Neutron star material is so dense that a sugar-cube-sized piece would weigh about a billion tons on Earth.",
            "NASA Goddard Space Flight Center",
        ),
        fact(
            5,
            "Quantum entanglement lets two particles share a single state across any distance — Einstein dismissed it as 'spooky action at a distance', and experiments keep proving it real.",
            "Nobel Prize Outreach",
        ),
        fact(
            6,
            "Absolute zero is unreachable, but labs have cooled atoms to less than a billionth of a degree above it, where they merge into a single quantum wave.",
            "MIT News",
        ),
        fact(
            7,
            "A photon of light experiences no time at all: at light speed, the journey across the universe is instantaneous from the photon's frame.",
            "Fermilab",
        ),
        fact(
            8,
            "Helium below 2.17 kelvin becomes a superfluid with zero viscosity — it climbs walls, escapes containers through film flow, and conducts heat better than any metal.",
            "American Physical Society",
        ),
        fact(
            9,
            "You are slightly heavier at the poles than at the equator: Earth's spin and equatorial bulge reduce effective gravity by about half a percent.",
            "NOAA",
        ),
        fact(
            10,
            "The LIGO detectors measure gravitational waves by sensing length changes of one ten-thousandth the width of a proton over four kilometers.",
            "LIGO Caltech",
        ),
    ]
}
