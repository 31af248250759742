//! Country-name gazetteer used by the geographic view.
//!
//! Names resolve to ISO 3166-1 alpha-3 codes, which is what map renderers key
//! on. Matching ignores case and surrounding whitespace; anything not listed
//! is treated as an unrecognised location.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// (alpha-3 code, accepted names). The first name is the display name.
const COUNTRIES: &[(&str, &[&str])] = &[
    ("AFG", &["Afghanistan"]),
    ("ALB", &["Albania"]),
    ("DZA", &["Algeria"]),
    ("ASM", &["American Samoa"]),
    ("AND", &["Andorra"]),
    ("AGO", &["Angola"]),
    ("AIA", &["Anguilla"]),
    ("ATA", &["Antarctica", "Antarctica (the territory South of 60 deg S)"]),
    ("ATG", &["Antigua and Barbuda", "Antigua & Barbuda"]),
    ("ARG", &["Argentina"]),
    ("ARM", &["Armenia"]),
    ("ABW", &["Aruba"]),
    ("AUS", &["Australia"]),
    ("AUT", &["Austria"]),
    ("AZE", &["Azerbaijan"]),
    ("BHS", &["Bahamas", "The Bahamas"]),
    ("BHR", &["Bahrain"]),
    ("BGD", &["Bangladesh"]),
    ("BRB", &["Barbados"]),
    ("BLR", &["Belarus"]),
    ("BEL", &["Belgium"]),
    ("BLZ", &["Belize"]),
    ("BEN", &["Benin"]),
    ("BMU", &["Bermuda"]),
    ("BTN", &["Bhutan"]),
    ("BOL", &["Bolivia", "Bolivia, Plurinational State of"]),
    ("BIH", &["Bosnia and Herzegovina", "Bosnia & Herzegovina"]),
    ("BWA", &["Botswana"]),
    ("BVT", &["Bouvet Island", "Bouvet Island (Bouvetoya)"]),
    ("BRA", &["Brazil"]),
    ("IOT", &["British Indian Ocean Territory", "British Indian Ocean Territory (Chagos Archipelago)"]),
    ("VGB", &["British Virgin Islands", "Virgin Islands, British"]),
    ("BRN", &["Brunei", "Brunei Darussalam"]),
    ("BGR", &["Bulgaria"]),
    ("BFA", &["Burkina Faso"]),
    ("BDI", &["Burundi"]),
    ("CPV", &["Cabo Verde", "Cape Verde"]),
    ("KHM", &["Cambodia"]),
    ("CMR", &["Cameroon"]),
    ("CAN", &["Canada"]),
    ("CYM", &["Cayman Islands"]),
    ("CAF", &["Central African Republic"]),
    ("TCD", &["Chad"]),
    ("CHL", &["Chile"]),
    ("CHN", &["China", "People's Republic of China"]),
    ("CXR", &["Christmas Island"]),
    ("CCK", &["Cocos (Keeling) Islands", "Cocos Islands"]),
    ("COL", &["Colombia"]),
    ("COM", &["Comoros"]),
    ("COG", &["Congo", "Republic of the Congo", "Congo, Republic of the"]),
    ("COD", &["Democratic Republic of the Congo", "Congo, Democratic Republic of the", "DR Congo"]),
    ("COK", &["Cook Islands"]),
    ("CRI", &["Costa Rica"]),
    ("CIV", &["Cote d'Ivoire", "Côte d'Ivoire", "Ivory Coast"]),
    ("HRV", &["Croatia"]),
    ("CUB", &["Cuba"]),
    ("CYP", &["Cyprus"]),
    ("CZE", &["Czechia", "Czech Republic"]),
    ("DNK", &["Denmark"]),
    ("DJI", &["Djibouti"]),
    ("DMA", &["Dominica"]),
    ("DOM", &["Dominican Republic"]),
    ("ECU", &["Ecuador"]),
    ("EGY", &["Egypt"]),
    ("SLV", &["El Salvador"]),
    ("GNQ", &["Equatorial Guinea"]),
    ("ERI", &["Eritrea"]),
    ("EST", &["Estonia"]),
    ("SWZ", &["Eswatini", "Swaziland"]),
    ("ETH", &["Ethiopia"]),
    ("FLK", &["Falkland Islands", "Falkland Islands (Malvinas)"]),
    ("FRO", &["Faroe Islands"]),
    ("FJI", &["Fiji"]),
    ("FIN", &["Finland"]),
    ("FRA", &["France"]),
    ("GUF", &["French Guiana"]),
    ("PYF", &["French Polynesia"]),
    ("ATF", &["French Southern Territories"]),
    ("GAB", &["Gabon"]),
    ("GMB", &["Gambia", "The Gambia"]),
    ("GEO", &["Georgia"]),
    ("DEU", &["Germany"]),
    ("GHA", &["Ghana"]),
    ("GIB", &["Gibraltar"]),
    ("GRC", &["Greece"]),
    ("GRL", &["Greenland"]),
    ("GRD", &["Grenada"]),
    ("GLP", &["Guadeloupe"]),
    ("GUM", &["Guam"]),
    ("GTM", &["Guatemala"]),
    ("GGY", &["Guernsey"]),
    ("GIN", &["Guinea"]),
    ("GNB", &["Guinea-Bissau"]),
    ("GUY", &["Guyana"]),
    ("HTI", &["Haiti"]),
    ("HMD", &["Heard Island and McDonald Islands"]),
    ("VAT", &["Holy See", "Holy See (Vatican City State)", "Vatican City"]),
    ("HND", &["Honduras"]),
    ("HKG", &["Hong Kong"]),
    ("HUN", &["Hungary"]),
    ("ISL", &["Iceland"]),
    ("IND", &["India"]),
    ("IDN", &["Indonesia"]),
    ("IRN", &["Iran", "Iran, Islamic Republic of"]),
    ("IRQ", &["Iraq"]),
    ("IRL", &["Ireland"]),
    ("IMN", &["Isle of Man"]),
    ("ISR", &["Israel"]),
    ("ITA", &["Italy"]),
    ("JAM", &["Jamaica"]),
    ("JPN", &["Japan"]),
    ("JEY", &["Jersey"]),
    ("JOR", &["Jordan"]),
    ("KAZ", &["Kazakhstan"]),
    ("KEN", &["Kenya"]),
    ("KIR", &["Kiribati"]),
    ("PRK", &["North Korea", "Korea, Democratic People's Republic of"]),
    ("KOR", &["South Korea", "Korea", "Korea, Republic of", "Republic of Korea"]),
    ("XKX", &["Kosovo"]),
    ("KWT", &["Kuwait"]),
    ("KGZ", &["Kyrgyzstan", "Kyrgyz Republic"]),
    ("LAO", &["Laos", "Lao People's Democratic Republic"]),
    ("LVA", &["Latvia"]),
    ("LBN", &["Lebanon"]),
    ("LSO", &["Lesotho"]),
    ("LBR", &["Liberia"]),
    ("LBY", &["Libya", "Libyan Arab Jamahiriya"]),
    ("LIE", &["Liechtenstein"]),
    ("LTU", &["Lithuania"]),
    ("LUX", &["Luxembourg"]),
    ("MAC", &["Macao", "Macau"]),
    ("MDG", &["Madagascar"]),
    ("MWI", &["Malawi"]),
    ("MYS", &["Malaysia"]),
    ("MDV", &["Maldives"]),
    ("MLI", &["Mali"]),
    ("MLT", &["Malta"]),
    ("MHL", &["Marshall Islands"]),
    ("MTQ", &["Martinique"]),
    ("MRT", &["Mauritania"]),
    ("MUS", &["Mauritius"]),
    ("MYT", &["Mayotte"]),
    ("MEX", &["Mexico"]),
    ("FSM", &["Micronesia", "Micronesia, Federated States of"]),
    ("MDA", &["Moldova", "Republic of Moldova"]),
    ("MCO", &["Monaco"]),
    ("MNG", &["Mongolia"]),
    ("MNE", &["Montenegro"]),
    ("MSR", &["Montserrat"]),
    ("MAR", &["Morocco"]),
    ("MOZ", &["Mozambique"]),
    ("MMR", &["Myanmar", "Burma"]),
    ("NAM", &["Namibia"]),
    ("NRU", &["Nauru"]),
    ("NPL", &["Nepal"]),
    ("NLD", &["Netherlands", "The Netherlands"]),
    ("ANT", &["Netherlands Antilles"]),
    ("NCL", &["New Caledonia"]),
    ("NZL", &["New Zealand"]),
    ("NIC", &["Nicaragua"]),
    ("NER", &["Niger"]),
    ("NGA", &["Nigeria"]),
    ("NIU", &["Niue"]),
    ("NFK", &["Norfolk Island"]),
    ("MKD", &["North Macedonia", "Macedonia"]),
    ("MNP", &["Northern Mariana Islands"]),
    ("NOR", &["Norway"]),
    ("OMN", &["Oman"]),
    ("PAK", &["Pakistan"]),
    ("PLW", &["Palau"]),
    ("PSE", &["Palestine", "Palestinian Territory", "State of Palestine"]),
    ("PAN", &["Panama"]),
    ("PNG", &["Papua New Guinea"]),
    ("PRY", &["Paraguay"]),
    ("PER", &["Peru"]),
    ("PHL", &["Philippines"]),
    ("PCN", &["Pitcairn", "Pitcairn Islands"]),
    ("POL", &["Poland"]),
    ("PRT", &["Portugal"]),
    ("PRI", &["Puerto Rico"]),
    ("QAT", &["Qatar"]),
    ("REU", &["Reunion", "Réunion"]),
    ("ROU", &["Romania"]),
    ("RUS", &["Russia", "Russian Federation"]),
    ("RWA", &["Rwanda"]),
    ("BLM", &["Saint Barthelemy", "Saint Barthélemy"]),
    ("SHN", &["Saint Helena"]),
    ("KNA", &["Saint Kitts and Nevis"]),
    ("LCA", &["Saint Lucia"]),
    ("MAF", &["Saint Martin"]),
    ("SPM", &["Saint Pierre and Miquelon"]),
    ("VCT", &["Saint Vincent and the Grenadines"]),
    ("WSM", &["Samoa"]),
    ("SMR", &["San Marino"]),
    ("STP", &["Sao Tome and Principe", "São Tomé and Príncipe"]),
    ("SAU", &["Saudi Arabia"]),
    ("SEN", &["Senegal"]),
    ("SRB", &["Serbia"]),
    ("SYC", &["Seychelles"]),
    ("SLE", &["Sierra Leone"]),
    ("SGP", &["Singapore"]),
    ("SVK", &["Slovakia", "Slovakia (Slovak Republic)", "Slovak Republic"]),
    ("SVN", &["Slovenia"]),
    ("SLB", &["Solomon Islands"]),
    ("SOM", &["Somalia"]),
    ("ZAF", &["South Africa"]),
    ("SGS", &["South Georgia and the South Sandwich Islands"]),
    ("SSD", &["South Sudan"]),
    ("ESP", &["Spain"]),
    ("LKA", &["Sri Lanka"]),
    ("SDN", &["Sudan"]),
    ("SUR", &["Suriname"]),
    ("SJM", &["Svalbard & Jan Mayen Islands", "Svalbard and Jan Mayen"]),
    ("SWE", &["Sweden"]),
    ("CHE", &["Switzerland"]),
    ("SYR", &["Syria", "Syrian Arab Republic"]),
    ("TWN", &["Taiwan"]),
    ("TJK", &["Tajikistan"]),
    ("TZA", &["Tanzania", "United Republic of Tanzania"]),
    ("THA", &["Thailand"]),
    ("TLS", &["Timor-Leste", "East Timor"]),
    ("TGO", &["Togo"]),
    ("TKL", &["Tokelau"]),
    ("TON", &["Tonga"]),
    ("TTO", &["Trinidad and Tobago"]),
    ("TUN", &["Tunisia"]),
    ("TUR", &["Turkey", "Türkiye"]),
    ("TKM", &["Turkmenistan"]),
    ("TCA", &["Turks and Caicos Islands"]),
    ("TUV", &["Tuvalu"]),
    ("UGA", &["Uganda"]),
    ("UKR", &["Ukraine"]),
    ("ARE", &["United Arab Emirates"]),
    ("GBR", &["United Kingdom", "UK", "Great Britain"]),
    ("USA", &["United States", "United States of America", "USA"]),
    ("UMI", &["United States Minor Outlying Islands"]),
    ("VIR", &["United States Virgin Islands", "Virgin Islands, U.S."]),
    ("URY", &["Uruguay"]),
    ("UZB", &["Uzbekistan"]),
    ("VUT", &["Vanuatu"]),
    ("VEN", &["Venezuela", "Venezuela, Bolivarian Republic of"]),
    ("VNM", &["Vietnam", "Viet Nam"]),
    ("WLF", &["Wallis and Futuna"]),
    ("ESH", &["Western Sahara"]),
    ("YEM", &["Yemen"]),
    ("ZMB", &["Zambia"]),
    ("ZWE", &["Zimbabwe"]),
];

static BY_NAME: Lazy<HashMap<String, &'static str>> = Lazy::new(|| {
    COUNTRIES
        .iter()
        .flat_map(|(code, names)| names.iter().map(move |name| (name.to_lowercase(), *code)))
        .collect()
});

/// ISO 3166-1 alpha-3 code for a country name, if recognised.
pub fn iso_alpha3(name: &str) -> Option<&'static str> {
    BY_NAME.get(&name.trim().to_lowercase()).copied()
}

/// Whether a country name can be placed on a map.
pub fn is_recognized(name: &str) -> bool {
    iso_alpha3(name).is_some()
}
