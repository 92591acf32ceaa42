//! Canonicalization table.
//!
//! Maps non-canonical Arabic-script code points (presentation forms, Arabic
//! letter variants, Arabic Mathematical Alphabetic Symbols, ligatures) onto
//! the canonical Persian letter. Rows are disjoint and no replacement contains
//! a key, so a single left-to-right pass is equivalent to applying the rows one
//! after another.

use phf::{Map, phf_map};

/// `char` → replacement. An empty replacement deletes the character.
pub static CANONICAL: Map<char, &'static str> = phf_map! {
    // ── dropped: annotation marks, small high letters, isolated harakat
    '\u{606}' => "", '\u{607}' => "", '\u{608}' => "",
    '\u{609}' => "", '\u{60A}' => "", '\u{60D}' => "",
    '\u{60E}' => "", '\u{610}' => "", '\u{611}' => "",
    '\u{612}' => "", '\u{613}' => "", '\u{614}' => "",
    '\u{615}' => "", '\u{616}' => "", '\u{618}' => "",
    '\u{619}' => "", '\u{61A}' => "", '\u{61E}' => "",
    '\u{656}' => "", '\u{657}' => "", '\u{658}' => "",
    '\u{659}' => "", '\u{65A}' => "", '\u{65B}' => "",
    '\u{65C}' => "", '\u{65D}' => "", '\u{65E}' => "",
    '\u{65F}' => "", '\u{66C}' => "", '\u{66D}' => "",
    '\u{6C1}' => "", '\u{6C2}' => "", '\u{6C3}' => "",
    '\u{6D4}' => "", '\u{6D6}' => "", '\u{6D7}' => "",
    '\u{6D8}' => "", '\u{6D9}' => "", '\u{6DA}' => "",
    '\u{6DB}' => "", '\u{6DC}' => "", '\u{6DD}' => "",
    '\u{6DF}' => "", '\u{6E0}' => "", '\u{6E1}' => "",
    '\u{6E2}' => "", '\u{6E3}' => "", '\u{6E4}' => "",
    '\u{6E5}' => "", '\u{6E6}' => "", '\u{6E7}' => "",
    '\u{6E8}' => "", '\u{6E9}' => "", '\u{6EA}' => "",
    '\u{6EB}' => "", '\u{6EC}' => "", '\u{6ED}' => "",
    '\u{6EE}' => "", '\u{6EF}' => "", '\u{FBA7}' => "",
    '\u{FBB2}' => "", '\u{FBB3}' => "", '\u{FBB4}' => "",
    '\u{FBB5}' => "", '\u{FBB6}' => "", '\u{FBB7}' => "",
    '\u{FBB8}' => "", '\u{FBB9}' => "", '\u{FBBA}' => "",
    '\u{FBBB}' => "", '\u{FBBC}' => "", '\u{FBBD}' => "",
    '\u{FBBE}' => "", '\u{FBBF}' => "", '\u{FBC0}' => "",
    '\u{FBC1}' => "", '\u{FC5E}' => "", '\u{FC5F}' => "",
    '\u{FC60}' => "", '\u{FC61}' => "", '\u{FC62}' => "",
    '\u{FC63}' => "", '\u{FE70}' => "", '\u{FE71}' => "",
    '\u{FE72}' => "", '\u{FE73}' => "", '\u{FE74}' => "",
    '\u{FE76}' => "", '\u{FE77}' => "", '\u{FE78}' => "",
    '\u{FE79}' => "", '\u{FE7A}' => "", '\u{FE7B}' => "",
    '\u{FE7C}' => "", '\u{FE7D}' => "", '\u{FE7E}' => "",
    '\u{FE7F}' => "",
    // ── ا (U+0627)
    '\u{623}' => "ا", '\u{625}' => "ا", '\u{671}' => "ا",
    '\u{672}' => "ا", '\u{673}' => "ا", '\u{675}' => "ا",
    '\u{773}' => "ا", '\u{774}' => "ا", '\u{FB50}' => "ا",
    '\u{FB51}' => "ا", '\u{FE83}' => "ا", '\u{FE84}' => "ا",
    '\u{FE87}' => "ا", '\u{FE88}' => "ا", '\u{FE8D}' => "ا",
    '\u{FE8E}' => "ا", '\u{1EE80}' => "ا", '\u{FD3C}' => "ا",
    '\u{FD3D}' => "ا", '\u{1EE00}' => "ا",
    // ── ب (U+0628)
    '\u{66E}' => "ب", '\u{755}' => "ب", '\u{756}' => "ب",
    '\u{FB52}' => "ب", '\u{FB53}' => "ب", '\u{FB54}' => "ب",
    '\u{FB55}' => "ب", '\u{FE8F}' => "ب", '\u{FE90}' => "ب",
    '\u{FE91}' => "ب", '\u{FE92}' => "ب", '\u{1EE01}' => "ب",
    '\u{1EE1C}' => "ب", '\u{1EE21}' => "ب", '\u{1EE61}' => "ب",
    '\u{1EE7C}' => "ب", '\u{1EE81}' => "ب", '\u{1EEA1}' => "ب",
    // ── پ (U+067E)
    '\u{680}' => "پ", '\u{750}' => "پ", '\u{754}' => "پ",
    '\u{FB56}' => "پ", '\u{FB57}' => "پ", '\u{FB58}' => "پ",
    '\u{FB59}' => "پ", '\u{FB5A}' => "پ", '\u{FB5B}' => "پ",
    '\u{FB5C}' => "پ", '\u{FB5D}' => "پ",
    // ── ت (U+062A)
    '\u{679}' => "ت", '\u{67A}' => "ت", '\u{67B}' => "ت",
    '\u{67C}' => "ت", '\u{753}' => "ت", '\u{FB5E}' => "ت",
    '\u{FB5F}' => "ت", '\u{FB60}' => "ت", '\u{FB61}' => "ت",
    '\u{FB62}' => "ت", '\u{FB63}' => "ت", '\u{FB64}' => "ت",
    '\u{FB65}' => "ت", '\u{FB66}' => "ت", '\u{FB67}' => "ت",
    '\u{FB68}' => "ت", '\u{FB69}' => "ت", '\u{FE95}' => "ت",
    '\u{FE96}' => "ت", '\u{FE97}' => "ت", '\u{FE98}' => "ت",
    '\u{1EE15}' => "ت", '\u{1EE35}' => "ت", '\u{1EE75}' => "ت",
    '\u{1EE95}' => "ت", '\u{1EEB5}' => "ت",
    // ── ث (U+062B)
    '\u{67D}' => "ث", '\u{67F}' => "ث", '\u{751}' => "ث",
    '\u{FE99}' => "ث", '\u{FE9A}' => "ث", '\u{FE9B}' => "ث",
    '\u{FE9C}' => "ث", '\u{1EE16}' => "ث", '\u{1EE36}' => "ث",
    '\u{1EE76}' => "ث", '\u{1EE96}' => "ث", '\u{1EEB6}' => "ث",
    // ── ج (U+062C)
    '\u{683}' => "ج", '\u{684}' => "ج", '\u{FB72}' => "ج",
    '\u{FB73}' => "ج", '\u{FB74}' => "ج", '\u{FB75}' => "ج",
    '\u{FB76}' => "ج", '\u{FB77}' => "ج", '\u{FB78}' => "ج",
    '\u{FB79}' => "ج", '\u{FE9D}' => "ج", '\u{FE9E}' => "ج",
    '\u{FE9F}' => "ج", '\u{FEA0}' => "ج", '\u{1EE02}' => "ج",
    '\u{1EE22}' => "ج", '\u{1EE42}' => "ج", '\u{1EE62}' => "ج",
    '\u{1EE82}' => "ج", '\u{1EEA2}' => "ج",
    // ── چ (U+0686)
    '\u{687}' => "چ", '\u{6BF}' => "چ", '\u{758}' => "چ",
    '\u{FB7A}' => "چ", '\u{FB7B}' => "چ", '\u{FB7C}' => "چ",
    '\u{FB7D}' => "چ", '\u{FB7E}' => "چ", '\u{FB7F}' => "چ",
    '\u{FB80}' => "چ", '\u{FB81}' => "چ", '\u{1EE03}' => "چ",
    '\u{1EE83}' => "چ",
    // ── ح (U+062D)
    '\u{681}' => "ح", '\u{76E}' => "ح", '\u{76F}' => "ح",
    '\u{772}' => "ح", '\u{77C}' => "ح", '\u{FEA1}' => "ح",
    '\u{FEA2}' => "ح", '\u{FEA3}' => "ح", '\u{FEA4}' => "ح",
    '\u{1EE07}' => "ح", '\u{1EE27}' => "ح", '\u{1EE47}' => "ح",
    '\u{1EE67}' => "ح", '\u{1EE87}' => "ح", '\u{1EEA7}' => "ح",
    // ── خ (U+062E)
    '\u{682}' => "خ", '\u{685}' => "خ", '\u{757}' => "خ",
    '\u{FEA5}' => "خ", '\u{FEA6}' => "خ", '\u{FEA7}' => "خ",
    '\u{FEA8}' => "خ", '\u{1EE17}' => "خ", '\u{1EE37}' => "خ",
    '\u{1EE57}' => "خ", '\u{1EE77}' => "خ", '\u{1EE97}' => "خ",
    '\u{1EEB7}' => "خ",
    // ── د (U+062F)
    '\u{688}' => "د", '\u{689}' => "د", '\u{68A}' => "د",
    '\u{68C}' => "د", '\u{68D}' => "د", '\u{68E}' => "د",
    '\u{68F}' => "د", '\u{690}' => "د", '\u{759}' => "د",
    '\u{75A}' => "د", '\u{FEA9}' => "د", '\u{FEAA}' => "د",
    '\u{1EEA3}' => "د", '\u{FB82}' => "د", '\u{FB83}' => "د",
    '\u{FB88}' => "د", '\u{FB89}' => "د",
    // ── ذ (U+0630)
    '\u{FC5B}' => "ذ", '\u{FEAB}' => "ذ", '\u{FEAC}' => "ذ",
    '\u{1EE18}' => "ذ", '\u{1EE98}' => "ذ", '\u{1EEB8}' => "ذ",
    '\u{FB84}' => "ذ", '\u{FB85}' => "ذ", '\u{FB86}' => "ذ",
    '\u{FB87}' => "ذ",
    // ── ر (U+0631)
    '\u{66B}' => "ر", '\u{691}' => "ر", '\u{692}' => "ر",
    '\u{693}' => "ر", '\u{694}' => "ر", '\u{695}' => "ر",
    '\u{696}' => "ر", '\u{75B}' => "ر", '\u{76C}' => "ر",
    '\u{FB8C}' => "ر", '\u{FB8D}' => "ر", '\u{FC5C}' => "ر",
    '\u{FEAD}' => "ر", '\u{FEAE}' => "ر", '\u{1EE13}' => "ر",
    '\u{1EE93}' => "ر", '\u{1EEB3}' => "ر",
    // ── ز (U+0632)
    '\u{697}' => "ز", '\u{699}' => "ز", '\u{76B}' => "ز",
    '\u{771}' => "ز", '\u{FEAF}' => "ز", '\u{FEB0}' => "ز",
    '\u{1EE06}' => "ز", '\u{1EE86}' => "ز", '\u{1EEA6}' => "ز",
    // ── ژ (U+0698)
    '\u{FB8A}' => "ژ", '\u{FB8B}' => "ژ",
    // ── س (U+0633)
    '\u{69A}' => "س", '\u{77D}' => "س", '\u{77E}' => "س",
    '\u{FEB1}' => "س", '\u{FEB2}' => "س", '\u{FEB3}' => "س",
    '\u{FEB4}' => "س", '\u{1EE0E}' => "س", '\u{1EE2E}' => "س",
    '\u{1EE4E}' => "س", '\u{1EE6E}' => "س", '\u{1EE8E}' => "س",
    '\u{1EEAE}' => "س",
    // ── ش (U+0634)
    '\u{69B}' => "ش", '\u{6FA}' => "ش", '\u{75C}' => "ش",
    '\u{76D}' => "ش", '\u{770}' => "ش", '\u{FEB5}' => "ش",
    '\u{FEB6}' => "ش", '\u{FEB7}' => "ش", '\u{FEB8}' => "ش",
    '\u{1EE14}' => "ش", '\u{1EE34}' => "ش", '\u{1EE54}' => "ش",
    '\u{1EE74}' => "ش", '\u{1EE94}' => "ش", '\u{1EEB4}' => "ش",
    // ── ص (U+0635)
    '\u{69D}' => "ص", '\u{FEB9}' => "ص", '\u{FEBA}' => "ص",
    '\u{FEBB}' => "ص", '\u{FEBC}' => "ص", '\u{1EE11}' => "ص",
    '\u{1EE51}' => "ص", '\u{1EE31}' => "ص", '\u{1EE71}' => "ص",
    '\u{1EE91}' => "ص", '\u{1EEB1}' => "ص",
    // ── ض (U+0636)
    '\u{69E}' => "ض", '\u{6FB}' => "ض", '\u{FEBD}' => "ض",
    '\u{FEBE}' => "ض", '\u{FEBF}' => "ض", '\u{FEC0}' => "ض",
    '\u{1EE19}' => "ض", '\u{1EE39}' => "ض", '\u{1EE59}' => "ض",
    '\u{1EE79}' => "ض", '\u{1EE99}' => "ض", '\u{1EEB9}' => "ض",
    // ── ط (U+0637)
    '\u{FEC1}' => "ط", '\u{FEC2}' => "ط", '\u{FEC3}' => "ط",
    '\u{FEC4}' => "ط", '\u{1EE08}' => "ط", '\u{1EE68}' => "ط",
    '\u{1EE88}' => "ط", '\u{1EEA8}' => "ط",
    // ── ظ (U+0638)
    '\u{69F}' => "ظ", '\u{FEC5}' => "ظ", '\u{FEC6}' => "ظ",
    '\u{FEC7}' => "ظ", '\u{FEC8}' => "ظ", '\u{1EE1A}' => "ظ",
    '\u{1EE7A}' => "ظ", '\u{1EE9A}' => "ظ", '\u{1EEBA}' => "ظ",
    // ── ع (U+0639)
    '\u{60F}' => "ع", '\u{6A0}' => "ع", '\u{FEC9}' => "ع",
    '\u{FECA}' => "ع", '\u{FECB}' => "ع", '\u{FECC}' => "ع",
    '\u{1EE0F}' => "ع", '\u{1EE2F}' => "ع", '\u{1EE4F}' => "ع",
    '\u{1EE6F}' => "ع", '\u{1EE8F}' => "ع", '\u{1EEAF}' => "ع",
    // ── غ (U+063A)
    '\u{6FC}' => "غ", '\u{75D}' => "غ", '\u{75E}' => "غ",
    '\u{75F}' => "غ", '\u{FECD}' => "غ", '\u{FECE}' => "غ",
    '\u{FECF}' => "غ", '\u{FED0}' => "غ", '\u{1EE1B}' => "غ",
    '\u{1EE3B}' => "غ", '\u{1EE5B}' => "غ", '\u{1EE7B}' => "غ",
    '\u{1EE9B}' => "غ", '\u{1EEBB}' => "غ",
    // ── ف (U+0641)
    '\u{60B}' => "ف", '\u{6A1}' => "ف", '\u{6A2}' => "ف",
    '\u{6A3}' => "ف", '\u{6A4}' => "ف", '\u{6A5}' => "ف",
    '\u{6A6}' => "ف", '\u{760}' => "ف", '\u{761}' => "ف",
    '\u{FB6A}' => "ف", '\u{FB6B}' => "ف", '\u{FB6C}' => "ف",
    '\u{FB6D}' => "ف", '\u{FB6E}' => "ف", '\u{FB6F}' => "ف",
    '\u{FB70}' => "ف", '\u{FB71}' => "ف", '\u{FED1}' => "ف",
    '\u{FED2}' => "ف", '\u{FED3}' => "ف", '\u{FED4}' => "ف",
    '\u{1EE10}' => "ف", '\u{1EE1E}' => "ف", '\u{1EE30}' => "ف",
    '\u{1EE70}' => "ف", '\u{1EE7E}' => "ف", '\u{1EE90}' => "ف",
    '\u{1EEB0}' => "ف",
    // ── ق (U+0642)
    '\u{66F}' => "ق", '\u{6A7}' => "ق", '\u{6A8}' => "ق",
    '\u{FED5}' => "ق", '\u{FED6}' => "ق", '\u{FED7}' => "ق",
    '\u{FED8}' => "ق", '\u{1EE12}' => "ق", '\u{1EE1F}' => "ق",
    '\u{1EE32}' => "ق", '\u{1EE52}' => "ق", '\u{1EE5F}' => "ق",
    '\u{1EE72}' => "ق", '\u{1EE92}' => "ق", '\u{1EEB2}' => "ق",
    // ── ک (U+06A9)
    '\u{63B}' => "ک", '\u{63C}' => "ک", '\u{643}' => "ک",
    '\u{6AA}' => "ک", '\u{6AB}' => "ک", '\u{6AC}' => "ک",
    '\u{6AD}' => "ک", '\u{6AE}' => "ک", '\u{762}' => "ک",
    '\u{763}' => "ک", '\u{764}' => "ک", '\u{77F}' => "ک",
    '\u{FB8E}' => "ک", '\u{FB8F}' => "ک", '\u{FB90}' => "ک",
    '\u{FB91}' => "ک", '\u{FBD3}' => "ک", '\u{FBD4}' => "ک",
    '\u{FBD5}' => "ک", '\u{FBD6}' => "ک", '\u{FED9}' => "ک",
    '\u{FEDA}' => "ک", '\u{FEDB}' => "ک", '\u{FEDC}' => "ک",
    '\u{1EE0A}' => "ک", '\u{1EE2A}' => "ک", '\u{1EE6A}' => "ک",
    // ── گ (U+06AF)
    '\u{6B0}' => "گ", '\u{6B1}' => "گ", '\u{6B2}' => "گ",
    '\u{6B3}' => "گ", '\u{6B4}' => "گ", '\u{FB92}' => "گ",
    '\u{FB93}' => "گ", '\u{FB94}' => "گ", '\u{FB95}' => "گ",
    '\u{FB96}' => "گ", '\u{FB97}' => "گ", '\u{FB98}' => "گ",
    '\u{FB99}' => "گ", '\u{FB9A}' => "گ", '\u{FB9B}' => "گ",
    '\u{FB9C}' => "گ", '\u{FB9D}' => "گ",
    // ── ل (U+0644)
    '\u{6B5}' => "ل", '\u{6B6}' => "ل", '\u{6B7}' => "ل",
    '\u{6B8}' => "ل", '\u{76A}' => "ل", '\u{FEDD}' => "ل",
    '\u{FEDE}' => "ل", '\u{FEDF}' => "ل", '\u{FEE0}' => "ل",
    '\u{1EE0B}' => "ل", '\u{1EE2B}' => "ل", '\u{1EE4B}' => "ل",
    '\u{1EE8B}' => "ل", '\u{1EEAB}' => "ل",
    // ── م (U+0645)
    '\u{6FE}' => "م", '\u{765}' => "م", '\u{766}' => "م",
    '\u{FEE1}' => "م", '\u{FEE2}' => "م", '\u{FEE3}' => "م",
    '\u{FEE4}' => "م", '\u{1EE0C}' => "م", '\u{1EE2C}' => "م",
    '\u{1EE6C}' => "م", '\u{1EE8C}' => "م", '\u{1EEAC}' => "م",
    // ── ن (U+0646)
    '\u{6B9}' => "ن", '\u{6BA}' => "ن", '\u{6BB}' => "ن",
    '\u{6BC}' => "ن", '\u{6BD}' => "ن", '\u{767}' => "ن",
    '\u{768}' => "ن", '\u{769}' => "ن", '\u{FB9E}' => "ن",
    '\u{FB9F}' => "ن", '\u{FBA0}' => "ن", '\u{FBA1}' => "ن",
    '\u{FEE5}' => "ن", '\u{FEE6}' => "ن", '\u{FEE7}' => "ن",
    '\u{FEE8}' => "ن", '\u{1EE0D}' => "ن", '\u{1EE1D}' => "ن",
    '\u{1EE2D}' => "ن", '\u{1EE4D}' => "ن", '\u{1EE5D}' => "ن",
    '\u{1EE6D}' => "ن", '\u{1EE8D}' => "ن", '\u{1EEAD}' => "ن",
    // ── و (U+0648)
    '\u{624}' => "و", '\u{676}' => "و", '\u{677}' => "و",
    '\u{6C4}' => "و", '\u{6C5}' => "و", '\u{6C6}' => "و",
    '\u{6C7}' => "و", '\u{6C8}' => "و", '\u{6C9}' => "و",
    '\u{6CA}' => "و", '\u{6CB}' => "و", '\u{6CF}' => "و",
    '\u{778}' => "و", '\u{779}' => "و", '\u{FBD7}' => "و",
    '\u{FBD8}' => "و", '\u{FBD9}' => "و", '\u{FBDA}' => "و",
    '\u{FBDB}' => "و", '\u{FBDC}' => "و", '\u{FBDD}' => "و",
    '\u{FBDE}' => "و", '\u{FBDF}' => "و", '\u{FBE0}' => "و",
    '\u{FBE1}' => "و", '\u{FBE2}' => "و", '\u{FBE3}' => "و",
    '\u{FE85}' => "و", '\u{FE86}' => "و", '\u{FEED}' => "و",
    '\u{FEEE}' => "و", '\u{1EE05}' => "و", '\u{1EE85}' => "و",
    '\u{1EEA5}' => "و",
    // ── ه (U+0647)
    '\u{629}' => "ه", '\u{6BE}' => "ه", '\u{6C0}' => "ه",
    '\u{6D5}' => "ه", '\u{6FF}' => "ه", '\u{FBA4}' => "ه",
    '\u{FBA5}' => "ه", '\u{FBA6}' => "ه", '\u{FBA9}' => "ه",
    '\u{FBA8}' => "ه", '\u{FBAA}' => "ه", '\u{FBAB}' => "ه",
    '\u{FBAC}' => "ه", '\u{FBAD}' => "ه", '\u{FE93}' => "ه",
    '\u{FE94}' => "ه", '\u{FEE9}' => "ه", '\u{FEEA}' => "ه",
    '\u{FEEB}' => "ه", '\u{FEEC}' => "ه", '\u{1EE24}' => "ه",
    '\u{1EE64}' => "ه", '\u{1EE84}' => "ه",
    // ── ی (U+06CC)
    '\u{620}' => "ی", '\u{626}' => "ی", '\u{63D}' => "ی",
    '\u{63E}' => "ی", '\u{63F}' => "ی", '\u{649}' => "ی",
    '\u{64A}' => "ی", '\u{678}' => "ی", '\u{6CD}' => "ی",
    '\u{6CE}' => "ی", '\u{6D0}' => "ی", '\u{6D1}' => "ی",
    '\u{6D2}' => "ی", '\u{6D3}' => "ی", '\u{775}' => "ی",
    '\u{776}' => "ی", '\u{777}' => "ی", '\u{77A}' => "ی",
    '\u{77B}' => "ی", '\u{FBA2}' => "ی", '\u{FBA3}' => "ی",
    '\u{FBAE}' => "ی", '\u{FBAF}' => "ی", '\u{FBB0}' => "ی",
    '\u{FBB1}' => "ی", '\u{FBE4}' => "ی", '\u{FBE5}' => "ی",
    '\u{FBE6}' => "ی", '\u{FBE7}' => "ی", '\u{FBE8}' => "ی",
    '\u{FBE9}' => "ی", '\u{FBFC}' => "ی", '\u{FBFD}' => "ی",
    '\u{FBFE}' => "ی", '\u{FBFF}' => "ی", '\u{FE89}' => "ی",
    '\u{FE8A}' => "ی", '\u{FE8B}' => "ی", '\u{FE8C}' => "ی",
    '\u{FEEF}' => "ی", '\u{FEF0}' => "ی", '\u{FEF1}' => "ی",
    '\u{FEF2}' => "ی", '\u{FEF3}' => "ی", '\u{FEF4}' => "ی",
    '\u{1EE09}' => "ی", '\u{1EE29}' => "ی", '\u{1EE49}' => "ی",
    '\u{1EE69}' => "ی", '\u{1EE89}' => "ی", '\u{1EEA9}' => "ی",
    // ── ء (U+0621)
    '\u{674}' => "ء", '\u{6FD}' => "ء", '\u{FE80}' => "ء",
    // ── لا
    '\u{FEF5}' => "لا", '\u{FEF6}' => "لا", '\u{FEF7}' => "لا",
    '\u{FEF8}' => "لا", '\u{FEF9}' => "لا", '\u{FEFA}' => "لا",
    '\u{FEFB}' => "لا", '\u{FEFC}' => "لا",
    // ── ligature words
    '\u{FDF2}' => "الله",
    '\u{FDFC}' => "ریال",
    '\u{FDF3}' => "اکبر",
    '\u{FDF4}' => "محمد",
    '\u{FDF5}' => "صلعم",
    '\u{FDF6}' => "رسول",
    '\u{FDF7}' => "علیه",
    '\u{FDF8}' => "وسلم",
    '\u{FDF9}' => "صلی",
    '\u{FDFA}' => "صلی الله علیه وسلم",
    '\u{FDFB}' => "جل جلاله",
};
