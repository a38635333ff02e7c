use crate::model::{Category, Fact, FactId};

fn fact(number: u32, text: &str, source: &str) -> Fact {
    Fact::new(
        FactId::new(format!("animals-{number}")),
        Category::Animals,
        text,
        source,
        number,
    )
}

pub(super) fn facts() -> Vec<Fact> {
    vec![
        fact(
            1,
            "Octopuses have three hearts. Two pump blood to the gills, while the third circulates it to the rest of the body — and the main heart stops beating when they swim.",
            "Smithsonian Magazine",
        )
        .with_source_url("https://www.smithsonianmag.com/science-nature/ten-curious-facts-about-octopuses-7625828/"),
        fact(
            2,
            "A group of flamingos is called a flamboyance. Their pink color comes entirely from the carotenoid pigments in the algae and crustaceans they eat.",
            "National Geographic",
        ),
        fact(
            3,
            "Sea otters hold hands while sleeping so they don't drift apart, and they wrap themselves in kelp as an anchor.",
            "Monterey Bay Aquarium",
        )
        .with_source_url("https://www.montereybayaquarium.org/animals/animals-a-to-z/sea-otter"),
        fact(
            4,
            "Tardigrades can survive the vacuum of space, temperatures near absolute zero, and radiation a thousand times the lethal human dose — by expelling nearly all their water and curling into a tun state.",
            "BBC Earth",
        ),
        fact(
            5,
            "Crows can recognize individual human faces and hold grudges for years. They also pass that knowledge on to their offspring.",
            "University of Washington",
        ),
        fact(
            6,
            "The mantis shrimp punches with the acceleration of a .22 caliber bullet, so fast the water around its club briefly boils in a process called cavitation.",
            "Nature",
        ),
        fact(
            7,
            "Elephants are one of the few animals that can recognize themselves in a mirror — a test of self-awareness shared only with great apes, dolphins, and magpies.",
            "PNAS",
        ),
        fact(
            8,
            "Axolotls can regenerate entire limbs, parts of their heart, and even portions of their brain — without any scar tissue.",
            "Scientific American",
        ),
        fact(
            9,
            "A blue whale's heart is the size of a small car and beats as few as two times per minute when the whale dives deep.",
            "Stanford University",
        ),
        fact(
            10,
            "Honeybees communicate the direction and distance of food sources through a 'waggle dance' — the angle of the dance maps the angle between the sun and the food.",
            "Nova, PBS",
        ),
    ]
}
