use crate::model::{Category, Fact, FactId};

fn fact(number: u32, text: &str, source: &str) -> Fact {
    Fact::new(
        FactId::new(format!("architecture-{number}")),
        Category::Architecture,
        text,
        source,
        number,
    )
}

pub(super) fn facts() -> Vec<Fact> {
    vec![
        fact(
            1,
            "The Eiffel Tower grows about 15 centimeters taller in summer. Heat expands the iron, and the tower also leans slightly away from the sun as the shaded side contracts.",
            "Société d'Exploitation de la tour Eiffel",
        )
        .with_source_url("https://www.toureiffel.paris/en/news/130-years/why-does-eiffel-tower-change-size"),
        fact(
            2,
            "Roman concrete grows stronger over centuries. Seawater reacting with volcanic ash forms rare aluminous tobermorite crystals that seal cracks as they appear.",
            "American Mineralogist",
        ),
        fact(
            3,
            "The Sagrada Família in Barcelona has been under construction since 1882 — longer than the Great Pyramid of Giza took to build.",
            "Basílica de la Sagrada Família",
        ),
        fact(
            4,
            "Fallingwater's cantilevered terraces were so daring that the contractor secretly added extra steel — and the builders still had to retrofit the sagging main cantilever decades later.",
            "Western Pennsylvania Conservancy",
        ),
        fact(
            5,
            "The Burj Khalifa is so tall that you can watch the sunset from the ground floor, take the elevator up, and watch it set again from the observation deck.",
            "NASA Earth Observatory",
        ),
        fact(
            6,
            "Japan's Hōryū-ji temple contains the world's oldest surviving wooden buildings, standing since around 607 AD through dozens of major earthquakes.",
            "UNESCO World Heritage Centre",
        ),
        fact(
            7,
            "The Pantheon in Rome still holds the record for the world's largest unreinforced concrete dome, 1,900 years after it was poured — its builders graded the aggregate lighter toward the top.",
            "Engineering Rome, University of Washington",
        ),
        fact(
            8,
            "Brunelleschi built the dome of Florence Cathedral without scaffolding from the ground, inventing a herringbone brick pattern that let each course support the next.",
            "National Geographic",
        ),
        fact(
            9,
            "The Empire State Building was erected in just 410 days, at times rising more than a story per day.",
            "Empire State Realty Trust",
        ),
        fact(
            10,
            "Gothic flying buttresses aren't decoration: they carry the outward thrust of the vaults away from the walls, which is why cathedral walls could finally be opened up into giant stained-glass windows.",
            "Khan Academy",
        ),
    ]
}
