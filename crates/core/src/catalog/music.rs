use crate::model::{Category, Fact, FactId};

fn fact(number: u32, text: &str, source: &str) -> Fact {
    Fact::new(
        FactId::new(format!("music-{number}")),
        Category::Music,
        text,
        source,
        number,
    )
}

pub(super) fn facts() -> Vec<Fact> {
    vec![
        fact(
            1,
            "Listening to music you love releases dopamine in the same reward circuits as food — and anticipation of a favorite passage triggers it before the notes arrive.",
            "Nature Neuroscience",
        ),
        fact(
            2,
            "The oldest known musical instruments are bone flutes from southern Germany, carved from vulture wing bones over 40,000 years ago.",
            "Nature",
        )
        .with_source_url("https://www.nature.com/articles/nature.2012.10786"),
        fact(
            3,
            "A piano is technically a percussion instrument: its strings are struck by felt hammers, not plucked or bowed.",
            "Encyclopaedia Britannica",
        ),
        fact(
            4,
            "Beethoven continued composing for a decade after going almost completely deaf — he sawed the legs off his piano to feel vibrations through the floor.",
            "Beethoven-Haus Bonn",
        ),
        fact(
            5,
            "No two Stradivarius violins sound the same, and science still can't fully explain why — density scans, varnish chemistry, and wood treated in Little Ice Age climate all play a part.",
            "PNAS",
        ),
        fact(
            6,
            "Singing in a choir synchronizes the singers' heartbeats: breathing together couples heart rate variability across the whole group.",
            "Frontiers in Psychology",
        ),
        fact(
            7,
            "The 'Mozart effect' is largely a myth — listening to Mozart doesn't raise IQ. But learning to play an instrument does measurably change brain structure.",
            "Nature Reviews Neuroscience",
        ),
        fact(
            8,
            "Absolute pitch is far more common among speakers of tonal languages like Mandarin, suggesting early language exposure tunes pitch perception.",
            "Journal of the Acoustical Society of America",
        ),
        fact(
            9,
            "The world's longest-running concert is John Cage's ORGAN²/ASLSP in Halberstadt, Germany: it began in 2001 and is scheduled to end in 2640.",
            "John-Cage-Orgel-Stiftung",
        ),
        fact(
            10,
            "Earworms — songs stuck in your head — hit about 90% of people weekly. Chewing gum interferes with the subvocal rehearsal that keeps them looping.",
            "Quarterly Journal of Experimental Psychology",
        ),
    ]
}
