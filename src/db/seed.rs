//! Demo catalog: two cities, three packages, Goa flights, hotels and activities.

use sqlx::{Sqlite, SqlitePool, Transaction};

use crate::error::Result;

struct SeedPackage {
    name: &'static str,
    destination: &'static str,
    description: &'static str,
    price: i64,
    duration: &'static str,
    image: &'static str,
    package_type: &'static str,
}

const PACKAGES: &[SeedPackage] = &[
    SeedPackage {
        name: "Goa Beach Escape",
        destination: "Goa",
        description: "Beaches, forts and a day on the water.",
        price: 18999,
        duration: "4D/3N",
        image: "https://picsum.photos/300/200?1",
        package_type: "Family",
    },
    SeedPackage {
        name: "Manali Adventure",
        destination: "Manali",
        description: "Snow trails, river rafting and mountain cafes.",
        price: 15999,
        duration: "5D/4N",
        image: "https://picsum.photos/300/200?2",
        package_type: "Adventure",
    },
    SeedPackage {
        name: "Kerala Honeymoon",
        destination: "Kerala",
        description: "Backwaters, houseboats and tea estates.",
        price: 25999,
        duration: "6D/5N",
        image: "https://picsum.photos/300/200?3",
        package_type: "Honeymoon",
    },
];

/// (source, destination, price, details)
const GOA_FLIGHTS: &[(&str, &str, i64, &str)] = &[
    ("New Delhi", "Goa", 6500, "19:40 - 22:15 | 6E-2603 | Cabin: 7kg | Check-in: 15kg"),
    ("Cochin", "Goa", 6000, "08:00 - 10:30 | 6E-1234 | Cabin: 7kg | Check-in: 15kg"),
    ("Goa", "Cochin", 6000, "18:00 - 20:30 | 6E-5678 | Cabin: 7kg | Check-in: 15kg"),
    ("Goa", "New Delhi", 7000, "12:10 - 14:45 | 6E-2604 | Cabin: 7kg | Check-in: 15kg"),
];

/// (name, price, address, room category, meal)
const GOA_HOTELS: &[(&str, i64, &str, &str, &str)] = &[
    (
        "Radisson Goa Candolim - Holidays Selections",
        5000,
        "Candolim, North Goa",
        "Executive Room",
        "Breakfast included",
    ),
    (
        "Taj Exotica Resort & Spa",
        8000,
        "Benaulim, South Goa",
        "Luxury Room",
        "Breakfast & Dinner",
    ),
    (
        "Holiday Inn Resort Goa",
        6500,
        "Cavelossim, South Goa",
        "Deluxe Room",
        "Breakfast included",
    ),
];

struct SeedActivity {
    name: &'static str,
    activity_type: &'static str,
    price: i64,
    rates: [Option<i64>; 4],
    details: &'static str,
}

const GOA_ACTIVITIES: &[SeedActivity] = &[
    SeedActivity {
        name: "Free Airport Transfers",
        activity_type: "pickup",
        price: 0,
        rates: [None; 4],
        details: "Private transfer from the airport to the hotel.",
    },
    SeedActivity {
        name: "NORTH GOA TOUR SIC",
        activity_type: "tour",
        price: 900,
        rates: [Some(900), Some(800), Some(750), Some(700)],
        details: "Fort Aguada, Calangute and Baga beaches on a shared coach.",
    },
    SeedActivity {
        name: "SOUTH GOA TOUR SIC",
        activity_type: "tour",
        price: 900,
        rates: [Some(900), Some(800), Some(750), Some(700)],
        details: "Old Goa churches, Miramar and Dona Paula on a shared coach.",
    },
    SeedActivity {
        name: "BOAT CRUISE RIDE",
        activity_type: "activity",
        price: 1200,
        rates: [Some(1200), Some(1100), None, None],
        details: "Sunset cruise on the Mandovi river with music and dance.",
    },
    SeedActivity {
        name: "SCUBA DIVING+WATERSPORTS",
        activity_type: "activity",
        price: 3500,
        rates: [Some(3500), Some(3200), Some(3000), Some(2800)],
        details: "Guided dive at Grande Island with parasailing and jet ski.",
    },
    SeedActivity {
        name: "Water Sports at Baga Beach",
        activity_type: "tour",
        price: 2000,
        rates: [None; 4],
        details: "Parasailing, jet ski and banana boat rides at Baga Beach.",
    },
    SeedActivity {
        name: "Free Airport Drop",
        activity_type: "drop",
        price: 0,
        rates: [None; 4],
        details: "Private transfer from the hotel to the airport.",
    },
];

/// Insert the demo catalog when no packages exist yet.
///
/// Returns whether anything was inserted.
pub async fn seed_demo_data(pool: &SqlitePool) -> Result<bool> {
    let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM package")
        .fetch_one(pool)
        .await?;
    if existing > 0 {
        tracing::info!("Skipping demo seed: {} packages already present", existing);
        return Ok(false);
    }

    let mut tx = pool.begin().await?;

    let goa_id = insert_city(&mut tx, "Goa").await?;
    insert_city(&mut tx, "Cochin").await?;

    for p in PACKAGES {
        sqlx::query(
            r#"
            INSERT INTO package (name, destination, description, price, duration, image, type)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(p.name)
        .bind(p.destination)
        .bind(p.description)
        .bind(p.price)
        .bind(p.duration)
        .bind(p.image)
        .bind(p.package_type)
        .execute(&mut *tx)
        .await?;
    }

    for (source, destination, price, details) in GOA_FLIGHTS {
        sqlx::query(
            r#"
            INSERT INTO flight (city_id, source_station, destination_station, price, details)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(goa_id)
        .bind(*source)
        .bind(*destination)
        .bind(*price)
        .bind(*details)
        .execute(&mut *tx)
        .await?;
    }

    for (name, price, address, room_category, meal) in GOA_HOTELS {
        sqlx::query(
            r#"
            INSERT INTO hotel (city_id, name, price, address, room_category, meal, details)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(goa_id)
        .bind(*name)
        .bind(*price)
        .bind(*address)
        .bind(*room_category)
        .bind(*meal)
        .bind(format!("{} | {}", room_category, meal))
        .execute(&mut *tx)
        .await?;
    }

    for a in GOA_ACTIVITIES {
        sqlx::query(
            r#"
            INSERT INTO activity (city_id, name, type, price, rate_1, rate_2, rate_3, rate_4, details)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(goa_id)
        .bind(a.name)
        .bind(a.activity_type)
        .bind(a.price)
        .bind(a.rates[0])
        .bind(a.rates[1])
        .bind(a.rates[2])
        .bind(a.rates[3])
        .bind(a.details)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;
    tracing::info!(
        "Seeded {} packages, {} flights, {} hotels, {} activities",
        PACKAGES.len(),
        GOA_FLIGHTS.len(),
        GOA_HOTELS.len(),
        GOA_ACTIVITIES.len()
    );

    Ok(true)
}

async fn insert_city(tx: &mut Transaction<'_, Sqlite>, name: &str) -> Result<i64> {
    let id: i64 = sqlx::query_scalar("INSERT INTO city (name) VALUES (?) RETURNING id")
        .bind(name)
        .fetch_one(&mut **tx)
        .await?;
    Ok(id)
}
