//! String table for the page chrome.
//!
//! Lookup only: no plural rules, no formatting. A key missing from the
//! requested language falls back to English, then to the key itself.

/// Display language.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum Lang {
    #[default]
    En,
    Zh,
}

impl Lang {
    pub fn code(self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Zh => "zh",
        }
    }

    /// Accepts `en`, `zh` and region-tagged forms such as `zh-CN`.
    pub fn from_code(code: &str) -> Option<Self> {
        let primary = code.split(['-', '_']).next()?.to_ascii_lowercase();
        match primary.as_str() {
            "en" => Some(Lang::En),
            "zh" => Some(Lang::Zh),
            _ => None,
        }
    }

    fn table(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Lang::En => EN,
            Lang::Zh => ZH,
        }
    }
}

static EN: &[(&str, &str)] = &[
    ("countdown.title", "Staking opens in"),
    ("countdown.live", "Staking is live"),
    ("countdown.days", "Days"),
    ("countdown.hours", "Hours"),
    ("countdown.minutes", "Minutes"),
    ("countdown.seconds", "Seconds"),
    ("sponsors.title", "Backed by"),
    ("scroll.top", "Back to top"),
    ("faq.title", "FAQ"),
    ("faq.what.q", "What is staking?"),
    ("faq.what.a", "Locking tokens to help secure the network in exchange for rewards."),
    ("faq.lock.q", "How long are tokens locked?"),
    ("faq.lock.a", "Each pool states its lock period before you stake."),
    ("faq.rewards.q", "When are rewards paid?"),
    ("faq.rewards.a", "Rewards accrue every epoch and can be claimed at any time."),
    ("faq.wallet.q", "Which wallets are supported?"),
    ("faq.wallet.a", "Any wallet that supports the standard connect flow."),
];

static ZH: &[(&str, &str)] = &[
    ("countdown.title", "距离质押开启"),
    ("countdown.live", "质押已开启"),
    ("countdown.days", "天"),
    ("countdown.hours", "时"),
    ("countdown.minutes", "分"),
    ("countdown.seconds", "秒"),
    ("sponsors.title", "合作伙伴"),
    ("scroll.top", "回到顶部"),
    ("faq.title", "常见问题"),
    ("faq.what.q", "什么是质押？"),
    ("faq.what.a", "锁定代币以帮助保障网络安全，并获得奖励。"),
    ("faq.lock.q", "代币锁定多久？"),
    ("faq.lock.a", "每个质押池在质押前都会注明锁定期。"),
    ("faq.rewards.q", "奖励何时发放？"),
    ("faq.rewards.a", "奖励按周期累计，可随时领取。"),
];

/// Looks up `key` in `lang`.
pub fn t(key: &str, lang: Lang) -> &str {
    lookup(lang.table(), key)
        .or_else(|| lookup(EN, key))
        .unwrap_or(key)
}

fn lookup(table: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}
