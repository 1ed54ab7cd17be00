//! Building reference list offered in the intake form

pub const BUILDINGS: &[&str] = &[
    "Rathaus - Marktplatz 2",
    "Haus zur Münze - Marktplatz 10",
    "Folzstraße 5",
    "Prinz-Carl-Anlage 3",
    "Klosterstraße 23",
    "Lutherring 31",
    "Feuerwehr - Kyffhäuserstraße 6",
    "Ludwigsplatz 5",
    "Musikschule - Valckenbergstraße 18",
    "Volkshochschule - Willy-Brand-Ring 11",
    "Würdtweinstraße 12a",
    "Schönauer Straße 2",
    "Kirschgartenweg 58",
    "Wilhelm-Leuschner-Straße 2",
    "Tourist Information - Neumarkt 14",
    "Raschi-Haus - Hintere Judengasse 6",
    "Andreasstift - Weckerlingplatz 1",
    "Nibelungenmuseum - Fischerpförtchen 10",
    "Friedhof - Eckenbergstraße 114",
    "Hohenstaufenring 2a",
    "IDB Lager - Johann-Braun-Straße 19",
    "Internetcafe - Sterngasse 10",
    "Von-Steuben-Straße 6",
    "Kindertageseinrichtungen",
    "Kinder- und Jugendbüros",
    "Pflege- und Physiotherapieschule/Klinikum",
    "Festplatz - Rheinstraße 55",
    "Monsheimer Straße 41",
    "Ortsverwaltungen",
    "Schloss Herrnsheim - Herrnsheimer Hauptstraße 1",
    "Seniorenbegegnungsstätte - Kleine Weide 1",
    "Tiergarten - Hammelsdamm 101",
    "Umwelthaus - Hammelsdamm 105",
    "Stadtteilbüros",
    "Karl-Hofmann-Schule BBS",
    "Berufsbildende Schule Wirtschaft",
    "Geschwister-Scholl-Schule Förderschule",
    "Dalberg Grundschule",
    "Diesterweg Grundschule",
    "Ernst-Ludwig Grundschule",
    "Karmeliter Grundschule",
    "Kerschensteiner Grundschule",
    "Klausenberg Grundschule",
    "Neusatz Grundschule",
    "Paternus Grundschule",
    "Pestalozzi Grundschule",
    "Rheindürkheim Grundschule",
    "Staudinger Grundschule",
    "Westend Grundschule",
    "Wiesengrundschule",
    "Wiesoppenheim Grundschule",
    "Eleonoren Gymnasium",
    "Gauß Gymnasium",
    "Rudi-Stephan Gymnasium",
    "Nelly-Sachs-IGS",
    "Karmeliter Realschule",
    "Nibelungen Realschule",
    "Pfrimmtal Realschule",
    "Westend Realschule",
    "Abgang",
    "IDB - Hafenstraße 4",
    "Carl-Villinger-Straße 9",
    "Grabenstraße - Am Schwimmbad",
    "Mainzer Straße 6.6",
];
