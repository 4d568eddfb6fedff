use std::sync::Arc;

use once_cell::sync::Lazy;

use super::ExtensionSet;

/// Built-in extensions: common generic TLDs, country-code TLDs and widely
/// used second-level registries.
pub const DEFAULT_EXTENSIONS: &[&str] = &[
    // Generic
    ".com", ".net", ".org", ".info", ".biz", ".name", ".pro", ".edu", ".gov", ".mil", ".int",
    ".aero", ".asia", ".cat", ".coop", ".jobs", ".mobi", ".museum", ".post", ".tel", ".travel",
    ".xxx", ".app", ".dev", ".io", ".ai", ".co", ".me", ".tv", ".cc", ".ws", ".fm", ".ly",
    ".blog", ".shop", ".online", ".site", ".store", ".tech", ".xyz", ".top", ".club", ".cloud",
    // Country code
    ".ac", ".ad", ".ae", ".af", ".ag", ".al", ".am", ".ao", ".ar", ".as", ".at", ".au", ".az",
    ".ba", ".bb", ".bd", ".be", ".bf", ".bg", ".bh", ".bi", ".bj", ".bm", ".bn", ".bo", ".br",
    ".bs", ".bt", ".bw", ".by", ".bz", ".ca", ".cd", ".cf", ".cg", ".ch", ".ci", ".cl", ".cm",
    ".cn", ".cr", ".cu", ".cv", ".cy", ".cz", ".de", ".dj", ".dk", ".dm", ".do", ".dz", ".ec",
    ".ee", ".eg", ".es", ".et", ".eu", ".fi", ".fj", ".fo", ".fr", ".ga", ".gd", ".ge", ".gg",
    ".gh", ".gi", ".gl", ".gm", ".gr", ".gt", ".gy", ".hk", ".hn", ".hr", ".ht", ".hu", ".id",
    ".ie", ".il", ".im", ".in", ".iq", ".ir", ".is", ".it", ".je", ".jm", ".jo", ".jp", ".ke",
    ".kg", ".kh", ".kr", ".kw", ".ky", ".kz", ".la", ".lb", ".li", ".lk", ".lr", ".ls", ".lt",
    ".lu", ".lv", ".ma", ".mc", ".md", ".mg", ".mk", ".ml", ".mn", ".mo", ".mt", ".mu", ".mv",
    ".mw", ".mx", ".my", ".mz", ".na", ".ne", ".ng", ".ni", ".nl", ".no", ".np", ".nz", ".om",
    ".pa", ".pe", ".pg", ".ph", ".pk", ".pl", ".pr", ".ps", ".pt", ".py", ".qa", ".ro", ".rs",
    ".ru", ".rw", ".sa", ".sc", ".sd", ".se", ".sg", ".si", ".sk", ".sl", ".sn", ".so", ".sr",
    ".sv", ".sy", ".sz", ".tg", ".th", ".tj", ".tm", ".tn", ".to", ".tr", ".tt", ".tw", ".tz",
    ".ua", ".ug", ".uk", ".us", ".uy", ".uz", ".va", ".vc", ".ve", ".vg", ".vn", ".vu", ".ye",
    ".za", ".zm", ".zw",
    // Second level
    ".co.uk", ".org.uk", ".me.uk", ".ltd.uk", ".plc.uk", ".net.uk", ".ac.uk", ".gov.uk",
    ".com.au", ".net.au", ".org.au", ".edu.au", ".gov.au", ".asn.au", ".id.au",
    ".co.nz", ".net.nz", ".org.nz", ".govt.nz", ".ac.nz",
    ".co.jp", ".ne.jp", ".or.jp", ".ac.jp", ".go.jp",
    ".co.kr", ".or.kr", ".ne.kr", ".go.kr",
    ".com.br", ".net.br", ".org.br", ".gov.br",
    ".com.cn", ".net.cn", ".org.cn", ".gov.cn", ".edu.cn",
    ".com.hk", ".org.hk", ".com.tw", ".org.tw", ".com.sg", ".edu.sg",
    ".com.mx", ".org.mx", ".gob.mx", ".com.ar", ".gob.ar",
    ".co.in", ".net.in", ".org.in", ".gov.in", ".ac.in",
    ".co.za", ".org.za", ".gov.za", ".ac.za",
    ".com.tr", ".gov.tr", ".com.ua", ".com.pl", ".co.il", ".ac.il", ".co.id", ".or.id",
    ".com.my", ".com.ph", ".com.vn", ".com.pk", ".com.ng", ".com.eg", ".co.th", ".ac.th",
];

static DEFAULTS: Lazy<Arc<ExtensionSet>> = Lazy::new(|| {
    Arc::new(
        ExtensionSet::new(DEFAULT_EXTENSIONS)
            .expect("DEFAULT_EXTENSIONS: hardcoded extension list is invalid"),
    )
});

/// Process-wide default extension set, built on first use.
///
/// The set is immutable; extractors share it through the returned `Arc`.
pub fn default_extensions() -> &'static Arc<ExtensionSet> {
    &DEFAULTS
}
