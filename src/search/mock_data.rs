// src/search/mock_data.rs

use crate::domain::property::Property;

/// A bundled sample listing. Kept as `'static` data so the table can never
/// be mutated; filtering builds fresh `Property` values.
pub struct MockListing {
    pub id: &'static str,
    pub address: &'static str,
    pub city: &'static str,
    pub state: &'static str,
    pub zip_code: &'static str,
    pub price: Option<f64>,
    pub rent_estimate: Option<f64>,
    pub bedrooms: Option<f64>,
    pub bathrooms: Option<f64>,
    pub square_footage: Option<f64>,
    pub year_built: Option<f64>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub property_type: Option<&'static str>,
}

impl MockListing {
    pub fn to_property(&self) -> Property {
        Property {
            id: self.id.to_string(),
            address: self.address.to_string(),
            city: self.city.to_string(),
            state: self.state.to_string(),
            zip_code: self.zip_code.to_string(),
            price: self.price,
            rent_estimate: self.rent_estimate,
            bedrooms: self.bedrooms,
            bathrooms: self.bathrooms,
            square_footage: self.square_footage,
            year_built: self.year_built,
            latitude: self.latitude,
            longitude: self.longitude,
            property_type: self.property_type.map(str::to_string),
            formatted_address: None,
        }
    }
}

pub static MOCK_LISTINGS: &[MockListing] = &[
    MockListing {
        id: "mock-1",
        address: "1450 Valencia St",
        city: "San Francisco",
        state: "CA",
        zip_code: "94110",
        price: Some(1_295_000.0),
        rent_estimate: Some(5_200.0),
        bedrooms: Some(3.0),
        bathrooms: Some(2.0),
        square_footage: Some(1_640.0),
        year_built: Some(1912.0),
        latitude: Some(37.7487),
        longitude: Some(-122.4206),
        property_type: Some("Single Family"),
    },
    MockListing {
        id: "mock-2",
        address: "88 King St Apt 1204",
        city: "San Francisco",
        state: "CA",
        zip_code: "94107",
        price: Some(849_000.0),
        rent_estimate: Some(3_900.0),
        bedrooms: Some(1.0),
        bathrooms: Some(1.0),
        square_footage: Some(780.0),
        year_built: Some(2002.0),
        latitude: Some(37.7786),
        longitude: Some(-122.3893),
        property_type: Some("Condo"),
    },
    MockListing {
        id: "mock-3",
        address: "3921 Ocean View Blvd",
        city: "San Diego",
        state: "CA",
        zip_code: "92113",
        price: Some(689_000.0),
        rent_estimate: Some(3_100.0),
        bedrooms: Some(3.0),
        bathrooms: Some(2.0),
        square_footage: Some(1_320.0),
        year_built: Some(1956.0),
        latitude: Some(32.7037),
        longitude: Some(-117.1152),
        property_type: Some("Single Family"),
    },
    MockListing {
        id: "mock-4",
        address: "275 N 1st St",
        city: "San Jose",
        state: "CA",
        zip_code: "95112",
        price: None,
        rent_estimate: Some(2_750.0),
        bedrooms: Some(2.0),
        bathrooms: Some(2.0),
        square_footage: Some(1_010.0),
        year_built: Some(2015.0),
        latitude: Some(37.3396),
        longitude: Some(-121.8946),
        property_type: Some("Apartment"),
    },
    MockListing {
        id: "mock-5",
        address: "1838 N Edgemont St",
        city: "Los Angeles",
        state: "CA",
        zip_code: "90027",
        price: Some(1_150_000.0),
        rent_estimate: None,
        bedrooms: Some(2.0),
        bathrooms: Some(1.5),
        square_footage: Some(1_204.0),
        year_built: Some(1924.0),
        latitude: Some(34.1038),
        longitude: Some(-118.2944),
        property_type: Some("Single Family"),
    },
    MockListing {
        id: "mock-6",
        address: "1107 E 6th St",
        city: "Austin",
        state: "TX",
        zip_code: "78702",
        price: Some(574_500.0),
        rent_estimate: Some(2_650.0),
        bedrooms: Some(3.0),
        bathrooms: Some(2.5),
        square_footage: Some(1_580.0),
        year_built: Some(2018.0),
        latitude: Some(30.2645),
        longitude: Some(-97.7301),
        property_type: Some("Townhouse"),
    },
    MockListing {
        id: "mock-7",
        address: "4502 Avenue H",
        city: "Austin",
        state: "TX",
        zip_code: "78751",
        price: Some(689_900.0),
        rent_estimate: Some(2_900.0),
        bedrooms: Some(2.0),
        bathrooms: Some(1.0),
        square_footage: Some(1_096.0),
        year_built: Some(1938.0),
        latitude: Some(30.3131),
        longitude: Some(-97.7258),
        property_type: Some("Single Family"),
    },
    MockListing {
        id: "mock-8",
        address: "2201 Western Ave Unit 402",
        city: "Seattle",
        state: "WA",
        zip_code: "98121",
        price: Some(615_000.0),
        rent_estimate: Some(2_800.0),
        bedrooms: Some(1.0),
        bathrooms: Some(1.0),
        square_footage: Some(712.0),
        year_built: Some(1999.0),
        latitude: Some(47.6114),
        longitude: Some(-122.3469),
        property_type: Some("Condo"),
    },
    MockListing {
        id: "mock-9",
        address: "3344 W 32nd Ave",
        city: "Denver",
        state: "CO",
        zip_code: "80211",
        price: Some(735_000.0),
        rent_estimate: Some(3_050.0),
        bedrooms: Some(4.0),
        bathrooms: Some(3.0),
        square_footage: Some(2_210.0),
        year_built: Some(1905.0),
        latitude: Some(39.7623),
        longitude: Some(-105.0322),
        property_type: Some("Single Family"),
    },
    MockListing {
        id: "mock-10",
        address: "4115 SE Division St",
        city: "Portland",
        state: "OR",
        zip_code: "97202",
        price: Some(529_000.0),
        rent_estimate: Some(2_400.0),
        bedrooms: Some(2.0),
        bathrooms: Some(1.0),
        square_footage: Some(1_150.0),
        year_built: None,
        latitude: None,
        longitude: None,
        property_type: Some("Single Family"),
    },
    MockListing {
        id: "mock-11",
        address: "1530 N Dearborn Pkwy",
        city: "Chicago",
        state: "IL",
        zip_code: "60610",
        price: Some(1_875_000.0),
        rent_estimate: None,
        bedrooms: Some(5.0),
        bathrooms: Some(4.5),
        square_footage: Some(4_300.0),
        year_built: Some(1891.0),
        latitude: Some(41.9100),
        longitude: Some(-87.6310),
        property_type: Some("Multi-Family"),
    },
    MockListing {
        id: "mock-12",
        address: "900 Brickell Key Blvd Apt 2801",
        city: "Miami",
        state: "FL",
        zip_code: "33131",
        price: Some(1_049_000.0),
        rent_estimate: Some(5_600.0),
        bedrooms: Some(2.0),
        bathrooms: Some(2.0),
        square_footage: Some(1_420.0),
        year_built: Some(2001.0),
        latitude: Some(25.7689),
        longitude: Some(-80.1870),
        property_type: Some("Condo"),
    },
    MockListing {
        id: "mock-13",
        address: "54 Dwight St",
        city: "Boston",
        state: "MA",
        zip_code: "02118",
        price: None,
        rent_estimate: Some(4_100.0),
        bedrooms: Some(2.0),
        bathrooms: Some(1.0),
        square_footage: None,
        year_built: Some(1870.0),
        latitude: Some(42.3440),
        longitude: Some(-71.0680),
        property_type: Some("Apartment"),
    },
    MockListing {
        id: "mock-14",
        address: "217 Garfield Pl",
        city: "Brooklyn",
        state: "NY",
        zip_code: "11215",
        price: Some(2_395_000.0),
        rent_estimate: None,
        bedrooms: Some(4.0),
        bathrooms: Some(3.5),
        square_footage: Some(3_000.0),
        year_built: Some(1899.0),
        latitude: Some(40.6733),
        longitude: Some(-73.9760),
        property_type: Some("Townhouse"),
    },
];
