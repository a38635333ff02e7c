use crate::model::{Category, Fact, FactId};

fn fact(number: u32, text: &str, source: &str) -> Fact {
    Fact::new(
        FactId::new(format!("chemistry-{number}")),
        Category::Chemistry,
        text,
        source,
        number,
    )
}

pub(super) fn facts() -> Vec<Fact> {
    vec![
        fact(
            1,
            "Helium was discovered on the sun before it was found on Earth — as an unknown yellow line in the solar spectrum during an 1868 eclipse.",
            "Royal Society of Chemistry",
        )
        .with_source_url("https://www.rsc.org/periodic-table/element/2/helium"),
        fact(
            2,
            "Glass is neither a true solid nor a liquid: it's an amorphous solid whose molecules are frozen in a disordered, liquid-like arrangement.",
            "Scientific American",
        ),
        fact(
            3,
            "Gallium melts at about 30 °C, so a solid gallium spoon will melt in a cup of tea — or in the palm of your hand.",
            "Royal Society of Chemistry",
        ),
        fact(
            4,
            "Every breath you take contains argon atoms that have cycled through the atmosphere for millions of years — argon is chemically inert, so it just keeps circulating.",
            "American Chemical Society",
        ),
        fact(
            5,
            "Hot water can freeze faster than cold water under some conditions — the Mpemba effect — and chemists still argue about why.",
            "Nature",
        ),
        fact(
            6,
            "Diamond and graphite are both pure carbon. The only difference is how the atoms bond: tetrahedral networks in diamond, stacked sheets in graphite.",
            "Encyclopaedia Britannica",
        ),
        fact(
            7,
            "The smell of rain on dry ground is petrichor: a mix of plant oils and geosmin, a compound released by soil bacteria, which humans can detect at five parts per trillion.",
            "Nature",
        ),
        fact(
            8,
            "Honey never spoils. Its low water content and acidity make it inhospitable to microbes — edible honey has been found in 3,000-year-old Egyptian tombs.",
            "Smithsonian Magazine",
        ),
        fact(
            9,
            "A single teaspoon of water contains more molecules than there are teaspoons of water in all the world's oceans.",
            "American Chemical Society",
        ),
        fact(
            10,
            "Fluorine is so reactive it can burn water, glass, and even asbestos. Early chemists trying to isolate it were injured so often they were called the 'fluorine martyrs'.",
            "Royal Society of Chemistry",
        ),
    ]
}
