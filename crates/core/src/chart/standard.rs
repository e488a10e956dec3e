//! Built-in general chart of accounts.

/// Account classes 1 to 7 with their main accounts.
pub(super) const STANDARD_CHART: &[(&str, &str)] = &[
    ("CLASS 1", "Capital accounts"),
    ("101", "Share capital"),
    ("104", "Share premium"),
    ("106", "Reserves"),
    ("108", "Owner's account"),
    ("110", "Retained earnings"),
    ("120", "Profit for the year"),
    ("129", "Loss for the year"),
    ("131", "Investment grants"),
    ("151", "Provisions for risks"),
    ("164", "Bank loans"),
    ("165", "Deposits and guarantees received"),
    ("168", "Other borrowings"),
    ("CLASS 2", "Fixed asset accounts"),
    ("201", "Start-up costs"),
    ("205", "Licences, software and similar rights"),
    ("207", "Goodwill"),
    ("211", "Land"),
    ("213", "Buildings"),
    ("215", "Technical installations and equipment"),
    ("218", "Other tangible fixed assets"),
    ("2183", "Office and computer equipment"),
    ("2184", "Furniture"),
    ("261", "Equity investments"),
    ("275", "Deposits and guarantees paid"),
    ("280", "Amortisation of intangible assets"),
    ("281", "Depreciation of tangible assets"),
    ("CLASS 3", "Inventory accounts"),
    ("31", "Raw materials"),
    ("35", "Finished goods"),
    ("37", "Goods for resale"),
    ("39", "Inventory impairment"),
    ("CLASS 4", "Third-party accounts"),
    ("401", "Suppliers"),
    ("404", "Fixed asset suppliers"),
    ("408", "Suppliers, invoices not yet received"),
    ("409", "Supplier advances"),
    ("411", "Customers"),
    ("416", "Doubtful customers"),
    ("418", "Customers, invoices to issue"),
    ("419", "Customer advances"),
    ("421", "Staff, salaries payable"),
    ("431", "Social security"),
    ("437", "Other social organisations"),
    ("444", "Corporate income tax"),
    ("445", "VAT"),
    ("44566", "Deductible VAT on goods and services"),
    ("44571", "Collected VAT"),
    ("455", "Partners' current accounts"),
    ("467", "Other receivables and payables"),
    ("486", "Prepaid expenses"),
    ("487", "Deferred income"),
    ("CLASS 5", "Financial accounts"),
    ("503", "Shares"),
    ("508", "Other marketable securities"),
    ("511", "Cheques to cash"),
    ("512", "Bank"),
    ("514", "Postal cheques"),
    ("530", "Cash"),
    ("580", "Internal transfers"),
    ("CLASS 6", "Expense accounts"),
    ("601", "Purchases of raw materials"),
    ("602", "Purchases of other supplies"),
    ("606", "Non-stocked purchases"),
    ("607", "Purchases of goods"),
    ("611", "Subcontracting"),
    ("613", "Rent"),
    ("615", "Maintenance and repairs"),
    ("616", "Insurance premiums"),
    ("622", "Fees"),
    ("623", "Advertising"),
    ("625", "Travel and entertainment"),
    ("626", "Postage and telecommunications"),
    ("627", "Bank charges"),
    ("635", "Other taxes"),
    ("641", "Salaries"),
    ("645", "Social security contributions"),
    ("661", "Interest expense"),
    ("671", "Exceptional expenses"),
    ("681", "Depreciation and provisions"),
    ("695", "Income tax"),
    ("CLASS 7", "Income accounts"),
    ("701", "Sales of finished goods"),
    ("706", "Services rendered"),
    ("707", "Sales of goods"),
    ("708", "Ancillary income"),
    ("709", "Rebates granted"),
    ("740", "Operating grants"),
    ("758", "Other operating income"),
    ("761", "Income from investments"),
    ("768", "Other financial income"),
    ("771", "Exceptional income"),
    ("781", "Reversals of depreciation and provisions"),
];
