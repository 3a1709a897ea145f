//! The compiled-in chapter table: 114 entries, number -> English and Arabic titles.
//! Entry `i` of [`CHAPTERS`] is chapter `i + 1`, so [`lookup`] is a bounds check
//! plus an index.
use serde::Serialize;

use crate::core::filename::canonical_stem;

/// Number of chapters in the table
pub const CHAPTER_COUNT: u32 = 114;

/// One chapter: its number and both titles
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize)]
pub struct Chapter {
    pub number: u32,
    pub english: &'static str,
    pub arabic: &'static str,
}

impl Chapter {
    const fn new(number: u32, english: &'static str, arabic: &'static str) -> Self {
        Self {
            number,
            english,
            arabic,
        }
    }
}

impl std::fmt::Display for Chapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&canonical_stem(self))
    }
}

/// Look up a chapter by its number. Anything outside 1..=114 yields `None`.
pub fn lookup(number: u32) -> Option<&'static Chapter> {
    if !(1..=CHAPTER_COUNT).contains(&number) {
        return None;
    }
    CHAPTERS.get((number - 1) as usize)
}

pub static CHAPTERS: [Chapter; CHAPTER_COUNT as usize] = [
    Chapter::new(1, "Al-Fathiha", "الفاتحة"),
    Chapter::new(2, "Al-Baqarah", "البقرة"),
    Chapter::new(3, "Ali-Imran", "آل عمران"),
    Chapter::new(4, "An-Nisa", "النساء"),
    Chapter::new(5, "Al-Ma'ida", "المائدة"),
    Chapter::new(6, "Al-An'am", "الأنعام"),
    Chapter::new(7, "Al-A'raf", "الأعراف"),
    Chapter::new(8, "Al-Anfal", "الأنفال"),
    Chapter::new(9, "At-Taubah", "التوبة"),
    Chapter::new(10, "Yunus", "يونس"),
    Chapter::new(11, "Hud", "هود"),
    Chapter::new(12, "Yusuf", "يوسف"),
    Chapter::new(13, "Ar-R'ad", "الرعد"),
    Chapter::new(14, "Ibrahim", "إبراهيم"),
    Chapter::new(15, "Al-Hijr", "الحجر"),
    Chapter::new(16, "An-Nahl", "النحل"),
    Chapter::new(17, "Al-Isra", "الإسراء"),
    Chapter::new(18, "Al-Kahf", "الكهف"),
    Chapter::new(19, "Maryam", "مريم"),
    Chapter::new(20, "Taha", "طه"),
    Chapter::new(21, "Al-Anbiya", "الأنبياء"),
    Chapter::new(22, "Al-Hajj", "الحج"),
    Chapter::new(23, "Al-Mu'minoon", "المؤمنون"),
    Chapter::new(24, "An-Noor", "النور"),
    Chapter::new(25, "Al-Furqan", "الفرقان"),
    Chapter::new(26, "Ash-Shu'ara", "الشعراء"),
    Chapter::new(27, "An-Naml", "النمل"),
    Chapter::new(28, "Al-Qasas", "القصص"),
    Chapter::new(29, "Al-Ankabut", "العنكبوت"),
    Chapter::new(30, "Ar-Rum", "الروم"),
    Chapter::new(31, "Luqman", "لقمان"),
    Chapter::new(32, "As-Sajdah", "السجدة"),
    Chapter::new(33, "Al-Ahzab", "الأحزاب"),
    Chapter::new(34, "Saba", "سبأ"),
    Chapter::new(35, "Fathir", "فاطر"),
    Chapter::new(36, "Yaseen", "يس"),
    Chapter::new(37, "As-Saffat", "الصافات"),
    Chapter::new(38, "Saad", "ص"),
    Chapter::new(39, "Az-Zumar", "الزمر"),
    Chapter::new(40, "Gafir", "غافر"),
    Chapter::new(41, "Fussilat", "فصلت"),
    Chapter::new(42, "Ash-Shura", "الشورى"),
    Chapter::new(43, "Az-Zukhruf", "الزخرف"),
    Chapter::new(44, "Ad-Dukhan", "الدخان"),
    Chapter::new(45, "Al-Jathiyah", "الجاثية"),
    Chapter::new(46, "Al-Ahqaf", "الأحقاف"),
    Chapter::new(47, "Muhammad", "محمد"),
    Chapter::new(48, "Al-Fath", "الفتح"),
    Chapter::new(49, "Al-Hujurat", "الحجرات"),
    Chapter::new(50, "Qaf", "ق"),
    Chapter::new(51, "Adh-Dhariyat", "الذاريات"),
    Chapter::new(52, "At-Toor", "الطور"),
    Chapter::new(53, "An-Najm", "النجم"),
    Chapter::new(54, "Al-Qamar", "القمر"),
    Chapter::new(55, "Ar-Rahman", "الرحمن"),
    Chapter::new(56, "Al-Waqiah", "الواقعة"),
    Chapter::new(57, "Al-Hadid", "الحديد"),
    Chapter::new(58, "Al-Mujadalah", "المجادلة"),
    Chapter::new(59, "Al-Hashr", "الحشر"),
    Chapter::new(60, "Al-Mumthahinah", "الممتحنة"),
    Chapter::new(61, "Al-Saff", "الصف"),
    Chapter::new(62, "Al-Jumuah", "الجمعة"),
    Chapter::new(63, "Al-Munafiqun", "المنافقون"),
    Chapter::new(64, "At-Thagabun", "التغابن"),
    Chapter::new(65, "At-Talaq", "الطلاق"),
    Chapter::new(66, "At-Tahrim", "التحريم"),
    Chapter::new(67, "Al-Mulk", "الملك"),
    Chapter::new(68, "Al-Qalam", "القلم"),
    Chapter::new(69, "Al-Haqqah", "الحاقة"),
    Chapter::new(70, "Al-Ma'arij", "المعارج"),
    Chapter::new(71, "Nuh", "نوح"),
    Chapter::new(72, "Al-Jinn", "الجن"),
    Chapter::new(73, "Al-Muzzammil", "المزمل"),
    Chapter::new(74, "Al-Muddassir", "المدثر"),
    Chapter::new(75, "Al-Qiyamah", "القيامة"),
    Chapter::new(76, "Al-Insan", "الإنسان"),
    Chapter::new(77, "Al-Mursalat", "المرسلات"),
    Chapter::new(78, "An-Naba", "النبأ"),
    Chapter::new(79, "An-Naziat", "النازعات"),
    Chapter::new(80, "Abasa", "عبس"),
    Chapter::new(81, "At-Takwir", "التكوير"),
    Chapter::new(82, "Al-Infitar", "الإنفطار"),
    Chapter::new(83, "Al-Mutaffifeen", "المطففين"),
    Chapter::new(84, "Al-Inshiqaq", "الإنشقاق"),
    Chapter::new(85, "Al-Buruj", "البروج"),
    Chapter::new(86, "At-Taariq", "الطارق"),
    Chapter::new(87, "Al-A'la", "الأعلى"),
    Chapter::new(88, "Al-Ghashiya", "الغاشية"),
    Chapter::new(89, "Al-Fajr", "الفجر"),
    Chapter::new(90, "Al-Balad", "البلد"),
    Chapter::new(91, "Ash-Shams", "الشمس"),
    Chapter::new(92, "Al-Lail", "الليل"),
    Chapter::new(93, "Ad-Dhuha", "الضحى"),
    Chapter::new(94, "Al-Inshirah", "الشرح"),
    Chapter::new(95, "At-Teen", "التين"),
    Chapter::new(96, "Al-Alaq", "العلق"),
    Chapter::new(97, "Al-Qadr", "القدر"),
    Chapter::new(98, "Al-Bayyinah", "البينة"),
    Chapter::new(99, "Al-Zalzalah", "الزلزلة"),
    Chapter::new(100, "Al-Aadiyat", "العاديات"),
    Chapter::new(101, "Al-Qariah", "القارعة"),
    Chapter::new(102, "At-Thakathur", "التكاثر"),
    Chapter::new(103, "Al-Asr", "العصر"),
    Chapter::new(104, "Al-Humazah", "الهمزة"),
    Chapter::new(105, "Al-Fil", "الفيل"),
    Chapter::new(106, "Quraish", "قريش"),
    Chapter::new(107, "Al-Maun", "الماعون"),
    Chapter::new(108, "Al-Kauthar", "الكوثر"),
    Chapter::new(109, "Al-Kafiroon", "الكافرون"),
    Chapter::new(110, "An-Nasr", "النصر"),
    Chapter::new(111, "Al-Masad", "المسد"),
    Chapter::new(112, "Al-Ikhlas", "الإخلاص"),
    Chapter::new(113, "Al-Falaq", "الفلق"),
    Chapter::new(114, "An-Nas", "الناس"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_indexed_by_number() {
        for (i, chapter) in CHAPTERS.iter().enumerate() {
            assert_eq!(chapter.number as usize, i + 1);
            assert!(!chapter.english.is_empty());
            assert!(!chapter.arabic.is_empty());
        }
    }

    #[test]
    fn test_lookup_every_chapter() {
        for n in 1..=CHAPTER_COUNT {
            let chapter = lookup(n).unwrap();
            assert_eq!(chapter.number, n);
        }
    }

    #[test]
    fn test_lookup_known_titles() {
        let c = lookup(3).unwrap();
        assert_eq!(c.english, "Ali-Imran");
        assert_eq!(c.arabic, "آل عمران");

        let c = lookup(7).unwrap();
        assert_eq!(c.english, "Al-A'raf");
        assert_eq!(c.arabic, "الأعراف");

        assert_eq!(lookup(114).unwrap().english, "An-Nas");
    }

    #[test]
    fn test_lookup_out_of_range() {
        assert!(lookup(0).is_none());
        assert!(lookup(115).is_none());
        assert!(lookup(150).is_none());
        assert!(lookup(u32::MAX).is_none());
    }

    #[test]
    fn test_display() {
        assert_eq!(lookup(1).unwrap().to_string(), "001 - Al-Fathiha - (الفاتحة)");
    }
}
