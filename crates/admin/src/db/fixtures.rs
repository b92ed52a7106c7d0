//! Demo data loaded into a freshly started store.

use chrono::Utc;

use diverse_capital_core::{
    Amount, MessageId, OrderId, OrderStatus, ProductCategory, ProductId, ProductStatus, UserId,
    UserRole, UserStatus,
};

use super::Collections;
use crate::models::{Message, Order, Product, SiteSettings, User};

/// Build the seeded collections. Timestamps are taken at call time.
#[must_use]
pub fn collections() -> Collections {
    Collections {
        products: products(),
        users: users(),
        orders: orders(),
        messages: messages(),
        settings: settings(),
    }
}

fn products() -> Vec<Product> {
    vec![
        Product {
            id: ProductId::new("1"),
            name: "Bitcoin Cloud Mining".to_string(),
            description: "Institutional-grade cloud mining with 100% green energy.".to_string(),
            price: Amount::from_units(5000),
            category: Some(ProductCategory::Crypto),
            image: "https://images.unsplash.com/photo-1518546305927-5a555bb7020d".to_string(),
            roi: "18.4%".to_string(),
            status: ProductStatus::Active,
            show_on_home: true,
            is_featured: true,
            min_investment: Amount::from_units(1000),
            maturity_period: "12 Months".to_string(),
        },
        Product {
            id: ProductId::new("2"),
            name: "Canary Wharf Tower".to_string(),
            description: "Fractional ownership in a prime London residential development."
                .to_string(),
            price: Amount::from_units(25000),
            category: Some(ProductCategory::RealEstate),
            image: "https://images.unsplash.com/photo-1560518883-ce09059eeffa".to_string(),
            roi: "8.5%".to_string(),
            status: ProductStatus::Active,
            show_on_home: true,
            is_featured: false,
            min_investment: Amount::from_units(5000),
            maturity_period: "24 Months".to_string(),
        },
    ]
}

fn users() -> Vec<User> {
    vec![User {
        id: UserId::new("1"),
        name: "Admin User".to_string(),
        email: "admin@diverse-capital.com".to_string(),
        role: UserRole::Admin,
        joined_at: Utc::now(),
        status: UserStatus::Active,
    }]
}

fn orders() -> Vec<Order> {
    vec![Order {
        id: OrderId::new("1"),
        user_id: UserId::new("1"),
        product_id: ProductId::new("1"),
        amount: Amount::from_units(5000),
        status: OrderStatus::Profits,
        date: Utc::now(),
        customer_name: "Admin User".to_string(),
        product_name: "Bitcoin Cloud Mining".to_string(),
    }]
}

fn messages() -> Vec<Message> {
    vec![Message {
        id: MessageId::new("1"),
        name: "John Doe".to_string(),
        email: "john@example.com".to_string(),
        subject: "Investment Inquiry".to_string(),
        message: "I am interested in the Real Estate portfolio.".to_string(),
        date: Utc::now(),
        is_read: false,
    }]
}

fn settings() -> SiteSettings {
    SiteSettings {
        bank_name: "Global Wealth Bank".to_string(),
        account_number: "1234567890".to_string(),
        account_name: "Diverse Capital Group".to_string(),
        swift_code: "GWBLUK22".to_string(),
        contact_email: "support@diverse-capital.com".to_string(),
        contact_phone: "+44 20 1234 5678".to_string(),
        contact_address: "123 Financial District, London, EC2V 6BT, UK".to_string(),
        about_us_content: "Diverse Capital is a leading investment platform...".to_string(),
        header_content: "Empowering Your Financial Future".to_string(),
        footer_content: "\u{a9} 2024 Diverse Capital Group. All rights reserved.".to_string(),
    }
}
