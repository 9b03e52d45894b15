//! Baseline reference data for a fresh StockMaster backend.

use super::record::{CategorySeed, ProductSeed, WarehouseSeed};
use crate::api::models::{Dimensions, LocationPayload};

pub const CATEGORIES: &[CategorySeed] = &[
    CategorySeed { name: "Electronics", description: Some("Electronic devices and accessories") },
    CategorySeed { name: "Office Supplies", description: Some("Office stationery and supplies") },
    CategorySeed { name: "Groceries", description: Some("Food and daily consumables") },
    CategorySeed { name: "Health & Beauty", description: Some("Healthcare and personal care items") },
    CategorySeed { name: "Household", description: Some("Household and cleaning products") },
];

pub const PRODUCTS: &[ProductSeed] = &[
    ProductSeed {
        name: "USB-C Cable 1m",
        sku: "ELEC-USBC-1M",
        barcode: Some("100000000001"),
        category: "Electronics",
        uom: Some("PCS"),
        reorder_point: Some(20),
        cost_price: Some(2.0),
        selling_price: Some(5.0),
        dimensions: Some(Dimensions { weight: Some(0.05), volume: Some(0.0003) }),
        metadata: &[("brand", "Generic"), ("color", "Black")],
    },
    ProductSeed {
        name: "Wireless Mouse",
        sku: "ELEC-MOUSE-WL",
        barcode: Some("100000000002"),
        category: "Electronics",
        uom: Some("PCS"),
        reorder_point: Some(15),
        cost_price: Some(8.0),
        selling_price: Some(15.0),
        dimensions: Some(Dimensions { weight: Some(0.2), volume: Some(0.0008) }),
        metadata: &[("brand", "TechBrand"), ("color", "Grey")],
    },
    ProductSeed {
        name: "A4 Printer Paper (500 sheets)",
        sku: "OFFICE-A4-500",
        barcode: Some("200000000001"),
        category: "Office Supplies",
        uom: Some("REAM"),
        reorder_point: Some(30),
        cost_price: Some(3.5),
        selling_price: Some(6.0),
        dimensions: Some(Dimensions { weight: Some(2.3), volume: Some(0.004) }),
        metadata: &[("brand", "OfficePro"), ("gsm", "80")],
    },
    ProductSeed {
        name: "Ballpoint Pen Blue (Box of 50)",
        sku: "OFFICE-PEN-BLUE-50",
        barcode: Some("200000000002"),
        category: "Office Supplies",
        uom: Some("BOX"),
        reorder_point: Some(25),
        cost_price: Some(1.5),
        selling_price: Some(3.0),
        dimensions: Some(Dimensions { weight: Some(0.4), volume: Some(0.001) }),
        metadata: &[("brand", "WriteWell"), ("ink_color", "Blue")],
    },
    ProductSeed {
        name: "Basmati Rice 5kg",
        sku: "GROC-RICE-5KG",
        barcode: Some("300000000001"),
        category: "Groceries",
        uom: Some("BAG"),
        reorder_point: Some(10),
        cost_price: Some(6.0),
        selling_price: Some(9.5),
        dimensions: Some(Dimensions { weight: Some(5.0), volume: Some(0.008) }),
        metadata: &[("brand", "DailyGrain")],
    },
    ProductSeed {
        name: "Olive Oil 1L",
        sku: "GROC-OIL-1L",
        barcode: Some("300000000002"),
        category: "Groceries",
        uom: Some("BOTTLE"),
        reorder_point: Some(15),
        cost_price: Some(4.0),
        selling_price: Some(7.0),
        dimensions: Some(Dimensions { weight: Some(1.05), volume: Some(0.0012) }),
        metadata: &[("brand", "Mediterraneo")],
    },
    ProductSeed {
        name: "Multivitamin Tablets (60)",
        sku: "HEALTH-MV-60",
        barcode: Some("400000000001"),
        category: "Health & Beauty",
        uom: Some("BOTTLE"),
        reorder_point: Some(20),
        cost_price: Some(5.5),
        selling_price: Some(10.0),
        dimensions: Some(Dimensions { weight: Some(0.15), volume: Some(0.0005) }),
        metadata: &[("brand", "HealthPlus")],
    },
    ProductSeed {
        name: "Shampoo 500ml",
        sku: "HEALTH-SHAM-500",
        barcode: Some("400000000002"),
        category: "Health & Beauty",
        uom: Some("BOTTLE"),
        reorder_point: Some(25),
        cost_price: Some(3.0),
        selling_price: Some(6.0),
        dimensions: Some(Dimensions { weight: Some(0.55), volume: Some(0.0007) }),
        metadata: &[("brand", "CareSoft")],
    },
    ProductSeed {
        name: "Laundry Detergent 2kg",
        sku: "HOUSE-LAUND-2KG",
        barcode: Some("500000000001"),
        category: "Household",
        uom: Some("BAG"),
        reorder_point: Some(18),
        cost_price: Some(4.5),
        selling_price: Some(8.0),
        dimensions: Some(Dimensions { weight: Some(2.0), volume: Some(0.004) }),
        metadata: &[("brand", "CleanHome")],
    },
    ProductSeed {
        name: "All-purpose Cleaner 1L",
        sku: "HOUSE-CLEAN-1L",
        barcode: Some("500000000002"),
        category: "Household",
        uom: Some("BOTTLE"),
        reorder_point: Some(20),
        cost_price: Some(2.2),
        selling_price: Some(4.2),
        dimensions: Some(Dimensions { weight: Some(1.1), volume: Some(0.0014) }),
        metadata: &[("brand", "Sparkle")],
    },
];

const fn loc(name: &'static str, aisle: &'static str) -> LocationPayload<'static> {
    LocationPayload { name, aisle: Some(aisle), rack: Some("1"), bin: Some("01") }
}

pub const WAREHOUSES: &[WarehouseSeed] = &[
    WarehouseSeed {
        name: "Central Warehouse",
        address: Some("123 Main St, City Center"),
        locations: &[
            loc("Receiving Dock", "R1"),
            loc("Bulk Storage", "B1"),
            loc("Picking Area", "P1"),
            loc("Dispatch Zone", "D1"),
        ],
    },
    WarehouseSeed {
        name: "East Side Warehouse",
        address: Some("45 Industrial Rd, East District"),
        locations: &[
            loc("Cold Storage", "C1"),
            loc("Dry Storage", "D2"),
            loc("Overflow Area", "O1"),
        ],
    },
];
