use crate::model::{Category, Fact, FactId};

fn fact(number: u32, text: &str, source: &str) -> Fact {
    Fact::new(
        FactId::new(format!("technology-{number}")),
        Category::Technology,
        text,
        source,
        number,
    )
}

pub(super) fn facts() -> Vec<Fact> {
    vec![
        fact(
            1,
            "The first computer bug was a literal moth, taped into the Harvard Mark II logbook in 1947 with the note 'first actual case of bug being found'.",
            "Smithsonian National Museum of American History",
        )
        .with_source_url("https://americanhistory.si.edu/collections/object/nmah_334663"),
        fact(
            2,
            "Your phone has millions of times more computing power than the Apollo 11 guidance computer, which ran at 0.043 MHz with 4 KB of RAM.",
            "NASA",
        ),
        fact(
            3,
            "Over 95% of international data travels through undersea fiber-optic cables — about 1.4 million kilometers of them, enough to circle the Earth 35 times.",
            "TeleGeography",
        ),
        fact(
            4,
            "The first website, info.cern.ch, went live in 1991 and is still online — it explains what the World Wide Web is.",
            "CERN",
        ),
        fact(
            5,
            "Modern chips are built with features smaller than a coronavirus: leading-edge transistor dimensions are measured in single-digit nanometers.",
            "IEEE Spectrum",
        ),
        fact(
            6,
            "The QWERTY layout was designed in the 1870s partly to keep frequently paired type bars from jamming — and we've kept it long after the jams disappeared.",
            "Smithsonian Magazine",
        ),
        fact(
            7,
            "GPS satellites must correct for relativity: their clocks run about 38 microseconds a day fast, which would otherwise drift positions by 10 kilometers daily.",
            "Ohio State University, Physics",
        ),
        fact(
            8,
            "About 90% of the world's data was created in the last two years — humanity now generates hundreds of exabytes every day.",
            "IBM",
        ),
        fact(
            9,
            "The Wi-Fi protocol's core patent came from CSIRO radio astronomy research — techniques for un-smearing radio waves from black holes.",
            "CSIRO",
        ),
        fact(
            10,
            "Bluetooth is named after Harald 'Bluetooth' Gormsson, the 10th-century king who united Denmark and Norway — the logo merges his runic initials.",
            "Bluetooth SIG",
        ),
    ]
}
