//! ISO-4217 currency lookup
//!
//! The form API carries currencies as zero-padded ISO numeric codes
//! (`vads_currency`), while merchants configure them by alpha-3 code. This
//! table covers the currencies the gateway settles; anything else resolves
//! to `CoreError::UnknownCurrency`.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

macro_rules! currencies {
    ($(($variant:ident, $alpha3:literal, $numeric:literal),)+) => {
        /// A currency the gateway can settle
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
        #[serde(rename_all = "UPPERCASE")]
        pub enum Currency {
            #[default]
            Eur,
            $($variant,)+
        }

        impl Currency {
            /// The ISO alpha-3 code (e.g. `EUR`)
            pub fn alpha3(&self) -> &'static str {
                match self {
                    Currency::Eur => "EUR",
                    $(Currency::$variant => $alpha3,)+
                }
            }

            /// The ISO numeric code (e.g. 978 for EUR)
            pub fn numeric(&self) -> u16 {
                match self {
                    Currency::Eur => 978,
                    $(Currency::$variant => $numeric,)+
                }
            }
        }

        impl FromStr for Currency {
            type Err = CoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    "EUR" => Ok(Currency::Eur),
                    $($alpha3 => Ok(Currency::$variant),)+
                    _ => Err(CoreError::UnknownCurrency { got: s.to_string() }),
                }
            }
        }
    };
}

currencies! {
    (Aed, "AED", 784),
    (Ars, "ARS", 32),
    (Aud, "AUD", 36),
    (Bgn, "BGN", 975),
    (Brl, "BRL", 986),
    (Cad, "CAD", 124),
    (Chf, "CHF", 756),
    (Cny, "CNY", 156),
    (Czk, "CZK", 203),
    (Dkk, "DKK", 208),
    (Gbp, "GBP", 826),
    (Hkd, "HKD", 344),
    (Huf, "HUF", 348),
    (Idr, "IDR", 360),
    (Ils, "ILS", 376),
    (Inr, "INR", 356),
    (Jpy, "JPY", 392),
    (Krw, "KRW", 410),
    (Kwd, "KWD", 414),
    (Mad, "MAD", 504),
    (Mxn, "MXN", 484),
    (Myr, "MYR", 458),
    (Nok, "NOK", 578),
    (Nzd, "NZD", 554),
    (Php, "PHP", 608),
    (Pln, "PLN", 985),
    (Ron, "RON", 946),
    (Rub, "RUB", 643),
    (Sar, "SAR", 682),
    (Sek, "SEK", 752),
    (Sgd, "SGD", 702),
    (Thb, "THB", 764),
    (Tnd, "TND", 788),
    (Try, "TRY", 949),
    (Twd, "TWD", 901),
    (Usd, "USD", 840),
    (Xof, "XOF", 952),
    (Xpf, "XPF", 953),
    (Zar, "ZAR", 710),
}

impl Currency {
    /// The numeric code rendered the way the form expects it, zero-padded
    /// to three digits (e.g. `032` for ARS).
    pub fn numeric_code(&self) -> String {
        format!("{:03}", self.numeric())
    }
}

impl Display for Currency {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.alpha3())
    }
}
