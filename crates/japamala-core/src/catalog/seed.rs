//! Built-in mantras.

use std::sync::OnceLock;

use super::{Mantra, MantraCategory};

/// Active mantra for a fresh install and the fallback for unknown ids.
pub const DEFAULT_MANTRA_ID: &str = "shiva-1";

static SEED: OnceLock<Vec<Mantra>> = OnceLock::new();

/// The built-in catalog. The first entry is always [`DEFAULT_MANTRA_ID`].
pub fn seed_mantras() -> &'static [Mantra] {
    SEED.get_or_init(build)
}

fn seed(
    id: &str,
    text: &str,
    transliteration: &str,
    meaning: &str,
    meaning_hindi: &str,
    category: MantraCategory,
) -> Mantra {
    Mantra {
        id: id.into(),
        text: text.into(),
        transliteration: transliteration.into(),
        meaning: meaning.into(),
        meaning_hindi: meaning_hindi.into(),
        category,
        is_custom: false,
    }
}

fn build() -> Vec<Mantra> {
    use MantraCategory::*;

    vec![
        seed(
            DEFAULT_MANTRA_ID,
            "ॐ नमः शिवाय",
            "Om Namah Shivaya",
            "I bow to Shiva, the auspicious one",
            "मैं शिव को नमन करता हूँ",
            Shiva,
        ),
        seed(
            "shiva-2",
            "ॐ त्र्यम्बकं यजामहे सुगन्धिं पुष्टिवर्धनम्",
            "Om Tryambakam Yajamahe Sugandhim Pushtivardhanam",
            "We worship the three-eyed one who nourishes all beings",
            "हम त्रिनेत्र शिव की आराधना करते हैं जो सबका पोषण करते हैं",
            Shiva,
        ),
        seed(
            "ram-1",
            "श्री राम जय राम जय जय राम",
            "Shri Ram Jai Ram Jai Jai Ram",
            "Victory to Lord Rama",
            "भगवान राम की जय हो",
            Ram,
        ),
        seed(
            "ram-2",
            "ॐ श्री रामाय नमः",
            "Om Shri Ramaya Namah",
            "Salutations to Lord Rama",
            "श्री राम को नमस्कार",
            Ram,
        ),
        seed(
            "krishna-1",
            "हरे कृष्ण हरे कृष्ण कृष्ण कृष्ण हरे हरे",
            "Hare Krishna Hare Krishna Krishna Krishna Hare Hare",
            "The great mantra of devotion to Krishna",
            "कृष्ण भक्ति का महामंत्र",
            Krishna,
        ),
        seed(
            "krishna-2",
            "ॐ नमो भगवते वासुदेवाय",
            "Om Namo Bhagavate Vasudevaya",
            "I bow to Lord Vasudeva, the indweller of all",
            "सर्वव्यापी भगवान वासुदेव को नमन",
            Krishna,
        ),
        seed(
            "goddess-1",
            "ॐ दुं दुर्गायै नमः",
            "Om Dum Durgayai Namah",
            "Salutations to Goddess Durga, the protector",
            "रक्षा करने वाली माँ दुर्गा को नमस्कार",
            Goddess,
        ),
        seed(
            "goddess-2",
            "ॐ श्रीं महालक्ष्म्यै नमः",
            "Om Shreem Mahalakshmyai Namah",
            "Salutations to Mahalakshmi, giver of abundance",
            "समृद्धि देने वाली महालक्ष्मी को नमस्कार",
            Goddess,
        ),
        seed(
            "ganesh-1",
            "ॐ गं गणपतये नमः",
            "Om Gam Ganapataye Namah",
            "Salutations to Ganesha, remover of obstacles",
            "विघ्नहर्ता गणेश को नमस्कार",
            Ganesh,
        ),
        seed(
            "hanuman-1",
            "ॐ हं हनुमते नमः",
            "Om Ham Hanumate Namah",
            "Salutations to Hanuman, embodiment of strength and devotion",
            "बल और भक्ति के स्वरूप हनुमान को नमस्कार",
            Hanuman,
        ),
        seed(
            "universal-1",
            "ॐ",
            "Om",
            "The primordial sound of the universe",
            "ब्रह्मांड की आदि ध्वनि",
            Universal,
        ),
        seed(
            "universal-2",
            "ॐ भूर्भुवः स्वः तत्सवितुर्वरेण्यं",
            "Om Bhur Bhuvah Svah Tat Savitur Varenyam",
            "We meditate on the radiance of the divine light",
            "हम दिव्य प्रकाश के तेज का ध्यान करते हैं",
            Universal,
        ),
        seed(
            "universal-3",
            "ॐ शान्तिः शान्तिः शान्तिः",
            "Om Shanti Shanti Shanti",
            "Peace in body, mind and spirit",
            "तन, मन और आत्मा में शांति",
            Universal,
        ),
    ]
}
