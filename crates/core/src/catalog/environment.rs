use crate::model::{Category, Fact, FactId};

fn fact(number: u32, text: &str, source: &str) -> Fact {
    Fact::new(
        FactId::new(format!("environment-{number}")),
        Category::Environment,
        text,
        source,
        number,
    )
}

pub(super) fn facts() -> Vec<Fact> {
    vec![
        fact(
            1,
            "More than half the oxygen you breathe comes from the ocean, produced by phytoplankton — microscopic drifting algae.",
            "NOAA",
        )
        .with_source_url("https://oceanservice.noaa.gov/facts/ocean-oxygen.html"),
        fact(
            2,
            "A single mature oak tree can drop 10,000 acorns in a good year and support over 2,300 species of birds, insects, fungi, and lichens.",
            "Woodland Trust",
        ),
        fact(
            3,
            "The Amazon rainforest makes its own weather: trees release so much water vapor that they seed the clouds that rain back down on the forest.",
            "NASA Earth Observatory",
        ),
        fact(
            4,
            "Peat bogs cover just 3% of the world's land surface but store twice as much carbon as all of its forests combined.",
            "UN Environment Programme",
        ),
        fact(
            5,
            "The Great Barrier Reef is the largest living structure on Earth — visible from space, and built by coral polyps just millimeters wide.",
            "Great Barrier Reef Foundation",
        ),
        fact(
            6,
            "The largest organism on Earth is a honey fungus in Oregon's Blue Mountains, spreading through nearly 10 square kilometers of soil.",
            "Scientific American",
        ),
        fact(
            7,
            "Wolves reintroduced to Yellowstone changed the course of its rivers: fewer browsing elk let riverbank willows recover, which stabilized the banks.",
            "Yellowstone National Park Service",
        ),
        fact(
            8,
            "Mangrove forests shield coastlines from storm surges and store up to four times more carbon per hectare than tropical rainforests.",
            "The Nature Conservancy",
        ),
        fact(
            9,
            "Trees in a forest share nutrients through underground fungal networks — older 'mother trees' can feed shaded seedlings through these connections.",
            "University of British Columbia",
        ),
        fact(
            10,
            "Earthworms have no lungs — they breathe through their skin, which is why they surface when rain saturates the soil.",
            "Natural History Museum, London",
        ),
    ]
}
