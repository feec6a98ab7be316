//! Invitation content.
//!
//! All text and asset paths shown on the page. The built-in default is the
//! Irma & Rangga invitation; a JSON file with the same shape can replace it
//! at launch.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{InvitationError, InvitationResult};

/// Everything the page renders
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InvitationContent {
    /// Couple title on the cover and footer
    pub title: String,
    /// Full date shown on the cover
    pub date_label: String,
    /// Short date shown in the footer
    pub footer_date: String,
    /// Label of the button that opens the invitation
    pub open_label: String,
    /// Decorative page background image
    pub background: String,
    pub opening: Opening,
    /// Heading above the couple introduction
    pub couple_heading: String,
    pub bride: Person,
    pub groom: Person,
    pub akad: EventDetails,
    pub reception: EventDetails,
    /// Paragraph under the reception card
    pub reception_remark: String,
    /// Closing salutation under the reception card
    pub farewell: String,
    /// Heading of the family closing section
    pub closing_heading: String,
    pub families: Vec<Family>,
    pub gallery_heading: String,
    pub gallery: Vec<Photo>,
    pub invitees_heading: String,
    pub invitees: Vec<InviteeGroup>,
    pub location: Location,
    pub music: MusicTrack,
}

/// Religious opening
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Opening {
    pub basmala: String,
    pub greeting: String,
    pub text: String,
}

/// Bride or groom
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub photo: String,
    /// e.g. "Putri dari"
    pub relation: String,
    pub parents: Vec<String>,
}

/// Date, time and venue of one event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventDetails {
    pub title: String,
    pub date: String,
    pub time: String,
    pub venue: String,
}

/// One family in the closing remarks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Family {
    pub title: String,
    pub members: Vec<String>,
}

/// A gallery photo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Photo {
    pub src: String,
    pub alt: String,
}

/// One side of the guest list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InviteeGroup {
    pub title: String,
    pub names: Vec<String>,
}

/// Map section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub heading: String,
    /// Embedded map iframe URL
    pub embed_url: String,
    /// External maps link, opened in a new browsing context
    pub maps_url: String,
    pub link_label: String,
}

/// Background music
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MusicTrack {
    /// Candidate files relative to the asset directory
    pub sources: Vec<String>,
    pub volume: f32,
}

const VENUE: &str = "Villa D'LAFISHA, Kp. Cijagung, Gede Pangrango RT.27 RW.07 – Kab. Sukabumi";
const WEDDING_DATE: &str = "Minggu, 15 Juni 2025";

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for InvitationContent {
    fn default() -> Self {
        let bride_parents = strings(&["Bpk. Jajang Afendi", "Ibu Dedeh Supriyati"]);
        let groom_parents = strings(&[
            "Ibu Ati (Almh)/Ibu Rinawati S.Pd",
            "Bpk. Juju (Alm)/Bpk. Nanang Suryana",
        ]);

        Self {
            title: "Irma & Rangga".to_string(),
            date_label: WEDDING_DATE.to_string(),
            footer_date: "15 Juni 2025".to_string(),
            open_label: "Lihat Undangan".to_string(),
            background: "images/floral.jpg".to_string(),
            opening: Opening {
                basmala: "بِسْمِ اللَّهِ الرَّحْمَنِ الرَّحِيم".to_string(),
                greeting: "Assalamu'alaikum Warahmatullahi Wabarakatuh".to_string(),
                text: "Dengan memohon rahmat dan ridho Allah SWT, kami bermaksud \
                       menyelenggarakan pernikahan putra-putri kami:"
                    .to_string(),
            },
            couple_heading: "Dengan memohon ridho Allah SWT...".to_string(),
            bride: Person {
                name: "Irma N.".to_string(),
                photo: "images/irma.jpg".to_string(),
                relation: "Putri dari".to_string(),
                parents: bride_parents.clone(),
            },
            groom: Person {
                name: "Rangga W.".to_string(),
                photo: "images/rangga.jpg".to_string(),
                relation: "Putra dari".to_string(),
                parents: groom_parents.clone(),
            },
            akad: EventDetails {
                title: "Akad Nikah".to_string(),
                date: WEDDING_DATE.to_string(),
                time: "Pukul 08.30 WIB".to_string(),
                venue: VENUE.to_string(),
            },
            reception: EventDetails {
                title: "Resepsi Pernikahan".to_string(),
                date: WEDDING_DATE.to_string(),
                time: "Pukul 10.00 WIB".to_string(),
                venue: VENUE.to_string(),
            },
            reception_remark: "Merupakan suatu kehormatan dan kebahagiaan bagi kami apabila \
                               Bapak/Ibu/Saudara/i berkenan hadir untuk memberikan doa restu \
                               kepada kedua mempelai."
                .to_string(),
            farewell: "Wassalamu'alaikum Warahmatullahi Wabarakatuh".to_string(),
            closing_heading: "Hormat Kami".to_string(),
            families: vec![
                Family {
                    title: "Keluarga Irma".to_string(),
                    members: bride_parents,
                },
                Family {
                    title: "Keluarga Rangga".to_string(),
                    members: groom_parents,
                },
            ],
            gallery_heading: "Galeri Foto".to_string(),
            gallery: (1..=3)
                .map(|i| Photo {
                    src: format!("images/prewed{}.jpg", i),
                    alt: format!("Pre-wedding photo {}", i),
                })
                .collect(),
            invitees_heading: "Turut Mengundang".to_string(),
            invitees: vec![
                InviteeGroup {
                    title: "Pihak Perempuan".to_string(),
                    names: strings(&[
                        "H. Denny",
                        "AKP Didin Waslidin",
                        "Kanit Eka",
                        "Asep Badrutamam (Kades)",
                        "Ustadz Uju",
                    ]),
                },
                InviteeGroup {
                    title: "Pihak Pria".to_string(),
                    names: strings(&[
                        "Wardi Sutandi (Kades)",
                        "Apad Padilah (Kadus)",
                        "Cecep Sanusi (BPD)",
                        "Ustadz Nendi",
                    ]),
                },
            ],
            location: Location {
                heading: "Lokasi".to_string(),
                embed_url: "https://www.google.com/maps/embed?pb=!1m17!1m12!1m3!1d990.3372683568978!2d106.92355750297166!3d-6.84869206473916!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m2!1m1!2zNsKwNTAnNTUuNSJTIDEwNsKwNTUnMjcuMCJF!5e0!3m2!1sid!2sid!4v1747634705114!5m2!1sid!2sid".to_string(),
                maps_url: "https://maps.app.goo.gl/CgUajWVn7cVtCrKi9".to_string(),
                link_label: "Buka di Google Maps".to_string(),
            },
            music: MusicTrack {
                sources: vec!["music/Aku-Memilihmu.mp3".to_string()],
                volume: 0.5,
            },
        }
    }
}

impl InvitationContent {
    /// Parse content from JSON. Missing top-level fields fall back to the
    /// default invitation.
    pub fn from_json(json: &str) -> InvitationResult<Self> {
        let content: Self = serde_json::from_str(json)?;
        content.validate()?;
        Ok(content)
    }

    /// Load and validate a JSON content file
    pub fn from_json_file(path: &Path) -> InvitationResult<Self> {
        let json = std::fs::read_to_string(path)?;
        let content = Self::from_json(&json)?;
        tracing::info!("Loaded invitation content from {:?}", path);
        Ok(content)
    }

    /// Reject content the page cannot render sensibly
    pub fn validate(&self) -> InvitationResult<()> {
        if self.title.trim().is_empty() {
            return Err(InvitationError::InvalidContent("title is empty".to_string()));
        }
        if self.gallery.is_empty() {
            return Err(InvitationError::InvalidContent("gallery has no photos".to_string()));
        }
        if self.music.sources.is_empty() {
            return Err(InvitationError::InvalidContent("music has no sources".to_string()));
        }
        if !(0.0..=1.0).contains(&self.music.volume) {
            return Err(InvitationError::InvalidContent(format!(
                "music volume {} outside 0.0 - 1.0",
                self.music.volume
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let content = InvitationContent::default();
        assert!(content.validate().is_ok());
        assert_eq!(content.title, "Irma & Rangga");
        assert_eq!(content.gallery.len(), 3);
        assert_eq!(content.gallery[2].src, "images/prewed3.jpg");
        assert_eq!(content.music.volume, 0.5);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let content = InvitationContent::from_json(r#"{"title": "Ayu & Bima"}"#).unwrap();
        assert_eq!(content.title, "Ayu & Bima");
        assert_eq!(content.akad.time, "Pukul 08.30 WIB");
    }

    #[test]
    fn rejects_empty_gallery() {
        let err = InvitationContent::from_json(r#"{"gallery": []}"#).unwrap_err();
        assert!(matches!(err, InvitationError::InvalidContent(_)));
    }

    #[test]
    fn rejects_loud_music() {
        let err = InvitationContent::from_json(
            r#"{"music": {"sources": ["music/a.mp3"], "volume": 1.5}}"#,
        )
        .unwrap_err();
        assert!(matches!(err, InvitationError::InvalidContent(_)));
    }

    #[test]
    fn malformed_json_is_serialization_error() {
        let err = InvitationContent::from_json("{").unwrap_err();
        assert!(matches!(err, InvitationError::Serialization(_)));
    }

    #[test]
    fn loads_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("content.json");
        let mut content = InvitationContent::default();
        content.footer_date = "1 Juli 2026".to_string();
        std::fs::write(&path, serde_json::to_string(&content).unwrap()).unwrap();

        let loaded = InvitationContent::from_json_file(&path).unwrap();
        assert_eq!(loaded.footer_date, "1 Juli 2026");
    }
}
