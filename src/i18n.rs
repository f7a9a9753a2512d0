//! Locale model: supported locales, reading direction, multilingual fields,
//! and the flat UI string tables served to the client.

use serde::{Deserialize, Serialize};

/// Supported UI locales. Unknown tags resolve to English.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    En,
    Fr,
    Ar,
}

/// Reading direction applied to the document root.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Dir {
    Ltr,
    Rtl,
}

impl Locale {
    pub fn as_str(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Fr => "fr",
            Locale::Ar => "ar",
        }
    }

    /// Resolve a BCP 47-ish tag ("fr", "ar-EG", "en_US"). Falls back to En.
    pub fn from_tag(tag: &str) -> Locale {
        let primary = tag
            .split(|c| c == '-' || c == '_')
            .next()
            .unwrap_or("")
            .to_ascii_lowercase();
        match primary.as_str() {
            "fr" => Locale::Fr,
            "ar" => Locale::Ar,
            _ => Locale::En,
        }
    }

    pub fn dir(self) -> Dir {
        match self {
            Locale::Ar => Dir::Rtl,
            _ => Dir::Ltr,
        }
    }
}

impl Dir {
    pub fn as_str(self) -> &'static str {
        match self {
            Dir::Ltr => "ltr",
            Dir::Rtl => "rtl",
        }
    }
}

/// A content field stored once per locale. All three translations are
/// required at creation; reads fall back to English when a translation
/// is missing or blank.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Localized {
    pub en: String,
    pub fr: String,
    pub ar: String,
}

impl Localized {
    pub fn get(&self, locale: Locale) -> &str {
        let picked = match locale {
            Locale::En => &self.en,
            Locale::Fr => &self.fr,
            Locale::Ar => &self.ar,
        };
        if picked.trim().is_empty() {
            &self.en
        } else {
            picked
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.en.trim().is_empty() && !self.fr.trim().is_empty() && !self.ar.trim().is_empty()
    }
}

/// Flat key/value UI strings for one locale. Key sets are identical across
/// locales; `messages` returns the table the client renders from.
pub fn messages(locale: Locale) -> &'static [(&'static str, &'static str)] {
    match locale {
        Locale::En => EN,
        Locale::Fr => FR,
        Locale::Ar => AR,
    }
}

const EN: &[(&str, &str)] = &[
    ("nav.home", "Home"),
    ("nav.about", "About Us"),
    ("nav.ministries", "Ministries"),
    ("nav.sermons", "Sermons"),
    ("nav.events", "Events"),
    ("nav.giving", "Giving"),
    ("nav.contact", "Contact"),
    ("events.upcoming", "Upcoming Events"),
    ("events.rsvp", "RSVP"),
    ("events.spotsLeft", "Spots left"),
    ("events.full", "Event is at full capacity"),
    ("events.alreadyRegistered", "You have already RSVPed for this event"),
    ("sermons.watch", "Watch Sermon"),
    ("sermons.speaker", "Speaker"),
    ("contact.send", "Send Message"),
    ("contact.thanks", "Thank you, your message has been received."),
    ("form.name", "Name"),
    ("form.email", "Email"),
    ("form.phone", "Phone"),
    ("form.message", "Message"),
    ("form.required", "This field is required"),
];

const FR: &[(&str, &str)] = &[
    ("nav.home", "Accueil"),
    ("nav.about", "À propos"),
    ("nav.ministries", "Ministères"),
    ("nav.sermons", "Prédications"),
    ("nav.events", "Événements"),
    ("nav.giving", "Dons"),
    ("nav.contact", "Contact"),
    ("events.upcoming", "Événements à venir"),
    ("events.rsvp", "Réserver"),
    ("events.spotsLeft", "Places restantes"),
    ("events.full", "L'événement est complet"),
    ("events.alreadyRegistered", "Vous êtes déjà inscrit à cet événement"),
    ("sermons.watch", "Regarder la prédication"),
    ("sermons.speaker", "Prédicateur"),
    ("contact.send", "Envoyer le message"),
    ("contact.thanks", "Merci, votre message a bien été reçu."),
    ("form.name", "Nom"),
    ("form.email", "Courriel"),
    ("form.phone", "Téléphone"),
    ("form.message", "Message"),
    ("form.required", "Ce champ est obligatoire"),
];

const AR: &[(&str, &str)] = &[
    ("nav.home", "الرئيسية"),
    ("nav.about", "من نحن"),
    ("nav.ministries", "الخدمات"),
    ("nav.sermons", "العظات"),
    ("nav.events", "الفعاليات"),
    ("nav.giving", "العطاء"),
    ("nav.contact", "اتصل بنا"),
    ("events.upcoming", "الفعاليات القادمة"),
    ("events.rsvp", "حجز مقعد"),
    ("events.spotsLeft", "المقاعد المتبقية"),
    ("events.full", "اكتمل العدد لهذه الفعالية"),
    ("events.alreadyRegistered", "لقد سجلت بالفعل في هذه الفعالية"),
    ("sermons.watch", "مشاهدة العظة"),
    ("sermons.speaker", "الواعظ"),
    ("contact.send", "إرسال الرسالة"),
    ("contact.thanks", "شكراً، تم استلام رسالتك."),
    ("form.name", "الاسم"),
    ("form.email", "البريد الإلكتروني"),
    ("form.phone", "الهاتف"),
    ("form.message", "الرسالة"),
    ("form.required", "هذا الحقل مطلوب"),
];
