use phf::{Map, phf_map};

/// ---------------------------------------------------------------------------
///    Macro – generates the alias map and the label list from one table
/// ---------------------------------------------------------------------------
macro_rules! define_scripts {
    ($( $label:literal => [ $($alias:literal),+ $(,)? ] ),* $(,)?) => {
        /// Script long value name -> ISO 15924 aliases, in registry order.
        pub static SCRIPT_ALIASES: Map<&'static str, &'static [&'static str]> = phf_map! {
            $( $label => &[$($alias),+], )*
        };

        /// Every label known to the registry, in table order.
        pub static SCRIPT_LABELS: &[&str] = &[$($label),*];
    };
}

// ---------------------------------------------------------------------------
//    Script entries of PropertyValueAliases.txt (`sc ; Code ; Name ; Alias*`)
//    Keyed by long name; the first alias is always the ISO 15924 code.
//    Coptic and Inherited carry a second, private-use alias (Qaac, Qaai).
//    Unicode 17.0.
// ---------------------------------------------------------------------------
define_scripts! {
    "Adlam" => ["Adlm"],
    "Caucasian_Albanian" => ["Aghb"],
    "Ahom" => ["Ahom"],
    "Arabic" => ["Arab"],
    "Imperial_Aramaic" => ["Armi"],
    "Armenian" => ["Armn"],
    "Avestan" => ["Avst"],
    "Balinese" => ["Bali"],
    "Bamum" => ["Bamu"],
    "Bassa_Vah" => ["Bass"],
    "Batak" => ["Batk"],
    "Bengali" => ["Beng"],
    "Beria_Erfe" => ["Berf"],
    "Bhaiksuki" => ["Bhks"],
    "Bopomofo" => ["Bopo"],
    "Brahmi" => ["Brah"],
    "Braille" => ["Brai"],
    "Buginese" => ["Bugi"],
    "Buhid" => ["Buhd"],
    "Chakma" => ["Cakm"],
    "Canadian_Aboriginal" => ["Cans"],
    "Carian" => ["Cari"],
    "Cham" => ["Cham"],
    "Cherokee" => ["Cher"],
    "Chisoi" => ["Chis"],
    "Chorasmian" => ["Chrs"],
    "Coptic" => ["Copt", "Qaac"],
    "Cypro_Minoan" => ["Cpmn"],
    "Cypriot" => ["Cprt"],
    "Cyrillic" => ["Cyrl"],
    "Devanagari" => ["Deva"],
    "Dives_Akuru" => ["Diak"],
    "Dogra" => ["Dogr"],
    "Deseret" => ["Dsrt"],
    "Duployan" => ["Dupl"],
    "Egyptian_Hieroglyphs" => ["Egyp"],
    "Elbasan" => ["Elba"],
    "Elymaic" => ["Elym"],
    "Ethiopic" => ["Ethi"],
    "Garay" => ["Gara"],
    "Georgian" => ["Geor"],
    "Glagolitic" => ["Glag"],
    "Gunjala_Gondi" => ["Gong"],
    "Masaram_Gondi" => ["Gonm"],
    "Gothic" => ["Goth"],
    "Grantha" => ["Gran"],
    "Greek" => ["Grek"],
    "Gujarati" => ["Gujr"],
    "Gurung_Khema" => ["Gukh"],
    "Gurmukhi" => ["Guru"],
    "Hangul" => ["Hang"],
    "Han" => ["Hani"],
    "Hanunoo" => ["Hano"],
    "Hatran" => ["Hatr"],
    "Hebrew" => ["Hebr"],
    "Hiragana" => ["Hira"],
    "Anatolian_Hieroglyphs" => ["Hluw"],
    "Pahawh_Hmong" => ["Hmng"],
    "Nyiakeng_Puachue_Hmong" => ["Hmnp"],
    "Katakana_Or_Hiragana" => ["Hrkt"],
    "Old_Hungarian" => ["Hung"],
    "Old_Italic" => ["Ital"],
    "Javanese" => ["Java"],
    "Kayah_Li" => ["Kali"],
    "Katakana" => ["Kana"],
    "Kawi" => ["Kawi"],
    "Kharoshthi" => ["Khar"],
    "Khmer" => ["Khmr"],
    "Khojki" => ["Khoj"],
    "Khitan_Small_Script" => ["Kits"],
    "Kannada" => ["Knda"],
    "Kirat_Rai" => ["Krai"],
    "Kaithi" => ["Kthi"],
    "Tai_Tham" => ["Lana"],
    "Lao" => ["Laoo"],
    "Latin" => ["Latn"],
    "Lepcha" => ["Lepc"],
    "Limbu" => ["Limb"],
    "Linear_A" => ["Lina"],
    "Linear_B" => ["Linb"],
    "Lisu" => ["Lisu"],
    "Lycian" => ["Lyci"],
    "Lydian" => ["Lydi"],
    "Mahajani" => ["Mahj"],
    "Makasar" => ["Maka"],
    "Mandaic" => ["Mand"],
    "Manichaean" => ["Mani"],
    "Marchen" => ["Marc"],
    "Medefaidrin" => ["Medf"],
    "Mende_Kikakui" => ["Mend"],
    "Meroitic_Cursive" => ["Merc"],
    "Meroitic_Hieroglyphs" => ["Mero"],
    "Malayalam" => ["Mlym"],
    "Modi" => ["Modi"],
    "Mongolian" => ["Mong"],
    "Mro" => ["Mroo"],
    "Meetei_Mayek" => ["Mtei"],
    "Multani" => ["Mult"],
    "Myanmar" => ["Mymr"],
    "Nag_Mundari" => ["Nagm"],
    "Nandinagari" => ["Nand"],
    "Old_North_Arabian" => ["Narb"],
    "Nabataean" => ["Nbat"],
    "Newa" => ["Newa"],
    "Nko" => ["Nkoo"],
    "Nushu" => ["Nshu"],
    "Ogham" => ["Ogam"],
    "Ol_Chiki" => ["Olck"],
    "Ol_Onal" => ["Onao"],
    "Old_Turkic" => ["Orkh"],
    "Oriya" => ["Orya"],
    "Osage" => ["Osge"],
    "Osmanya" => ["Osma"],
    "Old_Uyghur" => ["Ougr"],
    "Palmyrene" => ["Palm"],
    "Pau_Cin_Hau" => ["Pauc"],
    "Old_Permic" => ["Perm"],
    "Phags_Pa" => ["Phag"],
    "Inscriptional_Pahlavi" => ["Phli"],
    "Psalter_Pahlavi" => ["Phlp"],
    "Phoenician" => ["Phnx"],
    "Miao" => ["Plrd"],
    "Inscriptional_Parthian" => ["Prti"],
    "Rejang" => ["Rjng"],
    "Hanifi_Rohingya" => ["Rohg"],
    "Runic" => ["Runr"],
    "Samaritan" => ["Samr"],
    "Old_South_Arabian" => ["Sarb"],
    "Saurashtra" => ["Saur"],
    "SignWriting" => ["Sgnw"],
    "Shavian" => ["Shaw"],
    "Sharada" => ["Shrd"],
    "Siddham" => ["Sidd"],
    "Sidetic" => ["Sidt"],
    "Khudawadi" => ["Sind"],
    "Sinhala" => ["Sinh"],
    "Sogdian" => ["Sogd"],
    "Old_Sogdian" => ["Sogo"],
    "Sora_Sompeng" => ["Sora"],
    "Soyombo" => ["Soyo"],
    "Sundanese" => ["Sund"],
    "Sunuwar" => ["Sunu"],
    "Syloti_Nagri" => ["Sylo"],
    "Syriac" => ["Syrc"],
    "Tagbanwa" => ["Tagb"],
    "Takri" => ["Takr"],
    "Tai_Le" => ["Tale"],
    "New_Tai_Lue" => ["Talu"],
    "Tamil" => ["Taml"],
    "Tangut" => ["Tang"],
    "Tai_Viet" => ["Tavt"],
    "Tai_Yo" => ["Tayo"],
    "Telugu" => ["Telu"],
    "Tifinagh" => ["Tfng"],
    "Tagalog" => ["Tglg"],
    "Thaana" => ["Thaa"],
    "Thai" => ["Thai"],
    "Tibetan" => ["Tibt"],
    "Tirhuta" => ["Tirh"],
    "Tangsa" => ["Tnsa"],
    "Todhri" => ["Todr"],
    "Tolong_Siki" => ["Tols"],
    "Toto" => ["Toto"],
    "Tulu_Tigalari" => ["Tutg"],
    "Ugaritic" => ["Ugar"],
    "Vai" => ["Vaii"],
    "Vithkuqi" => ["Vith"],
    "Warang_Citi" => ["Wara"],
    "Wancho" => ["Wcho"],
    "Old_Persian" => ["Xpeo"],
    "Cuneiform" => ["Xsux"],
    "Yezidi" => ["Yezi"],
    "Yi" => ["Yiii"],
    "Zanabazar_Square" => ["Zanb"],
    "Inherited" => ["Zinh", "Qaai"],
    "Common" => ["Zyyy"],
    "Unknown" => ["Zzzz"],
}
