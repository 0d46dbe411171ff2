//! Form body decoding
//!
//! Create/edit pages submit classic urlencoded forms. Bodies arrive as
//! ordered key/value pairs so repeated keys (the `genres` multi-select)
//! survive decoding; missing fields default to empty rather than erroring.

/// Ordered key/value pairs from an urlencoded body
#[derive(Debug, Default)]
pub struct FormFields(Vec<(String, String)>);

impl FormFields {
    pub fn new(pairs: Vec<(String, String)>) -> Self {
        Self(pairs)
    }

    /// First value for `key`, or empty string when absent
    pub fn get(&self, key: &str) -> &str {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .unwrap_or("")
    }

    /// All values for `key`, in submission order
    pub fn get_all(&self, key: &str) -> Vec<String> {
        self.0
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
            .collect()
    }

    /// Seeking flags are true iff the submitted value is the literal "Yes"
    pub fn get_yes_flag(&self, key: &str) -> bool {
        self.get(key) == "Yes"
    }
}

#[derive(Debug, Clone)]
pub struct VenueForm {
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: String,
    pub image_link: String,
    pub genres: Vec<String>,
    pub facebook_link: String,
    pub website: String,
    pub seeking_talent: bool,
    pub seeking_description: String,
}

impl VenueForm {
    pub fn from_fields(fields: &FormFields) -> Self {
        Self {
            name: fields.get("name").to_string(),
            city: fields.get("city").to_string(),
            state: fields.get("state").to_string(),
            address: fields.get("address").to_string(),
            phone: fields.get("phone").to_string(),
            image_link: fields.get("image_link").to_string(),
            genres: fields.get_all("genres"),
            facebook_link: fields.get("facebook_link").to_string(),
            website: fields.get("website").to_string(),
            seeking_talent: fields.get_yes_flag("seeking_talent"),
            seeking_description: fields.get("seeking_description").to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ArtistForm {
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub image_link: String,
    pub genres: Vec<String>,
    pub facebook_link: String,
    pub website: String,
    pub seeking_venue: bool,
    pub seeking_description: String,
}

impl ArtistForm {
    pub fn from_fields(fields: &FormFields) -> Self {
        Self {
            name: fields.get("name").to_string(),
            city: fields.get("city").to_string(),
            state: fields.get("state").to_string(),
            phone: fields.get("phone").to_string(),
            image_link: fields.get("image_link").to_string(),
            genres: fields.get_all("genres"),
            facebook_link: fields.get("facebook_link").to_string(),
            website: fields.get("website").to_string(),
            seeking_venue: fields.get_yes_flag("seeking_venue"),
            seeking_description: fields.get("seeking_description").to_string(),
        }
    }
}

/// Raw show-form fields; ids and start time are validated inside the
/// write unit so a malformed submission fails like any other write error.
#[derive(Debug, Clone)]
pub struct ShowForm {
    pub artist_id: String,
    pub venue_id: String,
    pub start_time: String,
}

impl ShowForm {
    pub fn from_fields(fields: &FormFields) -> Self {
        Self {
            artist_id: fields.get("artist_id").to_string(),
            venue_id: fields.get("venue_id").to_string(),
            start_time: fields.get("start_time").to_string(),
        }
    }
}
