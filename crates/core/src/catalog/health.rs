use crate::model::{Category, Fact, FactId};

fn fact(number: u32, text: &str, source: &str) -> Fact {
    Fact::new(
        FactId::new(format!("health-{number}")),
        Category::Health,
        text,
        source,
        number,
    )
}

pub(super) fn facts() -> Vec<Fact> {
    vec![
        fact(
            1,
            "Your body replaces its entire outer skin layer roughly every month — about a thousand new skins in a lifetime.",
            "American Academy of Dermatology",
        ),
        fact(
            2,
            "The gut contains around 100 million neurons — more than the spinal cord — which is why it's sometimes called the 'second brain'.",
            "Johns Hopkins Medicine",
        )
        .with_source_url("https://www.hopkinsmedicine.org/health/wellness-and-prevention/the-brain-gut-connection"),
        fact(
            3,
            "Bones are, gram for gram, stronger than steel: a cubic inch of bone can bear loads of roughly 19,000 pounds.",
            "National Institutes of Health",
        ),
        fact(
            4,
            "During deep sleep, the brain's glymphatic system flushes out metabolic waste — including the amyloid proteins linked to Alzheimer's disease.",
            "NIH, National Institute of Neurological Disorders",
        ),
        fact(
            5,
            "Laughing genuinely lowers stress hormones and triggers endorphin release — and brief social laughter raises pain thresholds measurably.",
            "Proceedings of the Royal Society B",
        ),
        fact(
            6,
            "Your heart beats about 100,000 times a day, pumping roughly 7,500 liters of blood through vessels that would stretch 100,000 kilometers laid end to end.",
            "American Heart Association",
        ),
        fact(
            7,
            "Two minutes of walking every hour offsets some of the health risks of prolonged sitting, even without other exercise.",
            "Clinical Journal of the American Society of Nephrology",
        ),
        fact(
            8,
            "The human eye can distinguish around 10 million colors, yet the lens filters out ultraviolet — people who lose their natural lens can sometimes see into the UV range.",
            "Scientific American",
        ),
        fact(
            9,
            "Half of your body's cells are not human: bacteria, fungi, and archaea in and on your body roughly match your own cells in number.",
            "PLOS Biology",
        ),
        fact(
            10,
            "Stomach acid is strong enough to dissolve razor blades — the stomach protects itself by regrowing its entire mucus lining every few days.",
            "Gastroenterology",
        ),
    ]
}
