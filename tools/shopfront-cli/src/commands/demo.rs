//! `shopfront demo` - interactive storefront session against the shared cart.

use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Select};
use shopfront_commerce::prelude::*;
use std::sync::{Mutex, PoisonError};

use crate::commands::rig::cpu_option;
use crate::output::Output;

const MENU: &[&str] = &[
    "Add the Fruit product line",
    "Add the Robo product line",
    "Build a custom rig",
    "Add the Student Starter Pack bundle",
    "Add clearance stock",
    "View cart",
    "Checkout",
    "Quit",
];

/// Run the interactive session.
pub fn run(output: &Output) -> Result<()> {
    let cart = Cart::shared();
    output.heading("Shopfront");

    loop {
        let choice = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("What next?")
            .items(MENU)
            .default(0)
            .interact()?;

        match choice {
            0 => add_family(Brand::Fruit, cart, output),
            1 => add_family(Brand::Robo, cart, output),
            2 => build_rig(cart, output)?,
            3 => add_bundle(cart, output),
            4 => add_clearance(cart, output),
            5 => view_cart(cart, output),
            6 => checkout(cart, output)?,
            _ => break,
        }
    }
    Ok(())
}

fn lock(cart: &Mutex<Cart>) -> std::sync::MutexGuard<'_, Cart> {
    cart.lock().unwrap_or_else(PoisonError::into_inner)
}

fn add_family(brand: Brand, cart: &Mutex<Cart>, output: &Output) {
    let line = brand.product_line();
    let mut cart = lock(cart);
    cart.add_item(line.laptop);
    cart.add_item(line.phone);
    output.success(&format!("Added the {} product line", brand.tag()));
}

fn build_rig(cart: &Mutex<Cart>, output: &Output) -> Result<()> {
    let tiers = &["base", "high-end"];
    let tier = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("CPU tier")
        .items(tiers)
        .default(0)
        .interact()?;
    let (kind, price) = cpu_option(tiers[tier])?;

    let mut builder = RigBuilder::new().cpu(kind, price);
    if confirm("Add the RTX 4090 GPU?")? {
        builder = builder.gpu();
    }
    if confirm("Add 32GB RAM?")? {
        builder = builder.ram();
    }
    if confirm("Add RGB lights?")? {
        builder = builder.rgb_lighting();
    }

    let rig = builder.build()?;
    output.success(&format!("{} at {}", rig.name(), rig.price()));
    lock(cart).add_item(rig);
    Ok(())
}

fn add_bundle(cart: &Mutex<Cart>, output: &Output) {
    let mut bundle = Bundle::new("Student Starter Pack");
    bundle.push(Brand::Fruit.laptop());
    bundle.push(Brand::Fruit.phone());
    bundle.push(CatalogItem::new("Fast Charger", Money::from_cents(5_000)));

    output.success(&format!("{} at {}", bundle.name(), bundle.price()));
    lock(cart).add_item(bundle);
}

fn add_clearance(cart: &Mutex<Cart>, output: &Output) {
    let adapted = ClearanceAdapter::new(LegacyStockRecord::new("Floppy Disk 3.5", 500));
    output.success(&format!("{} at {}", adapted.name(), adapted.price()));
    lock(cart).add_item(adapted);
}

fn view_cart(cart: &Mutex<Cart>, output: &Output) {
    let cart = lock(cart);
    if cart.is_empty() {
        output.info("Cart is empty");
        return;
    }
    output.heading(&format!("Cart ({} items)", cart.len()));
    for item in cart.items() {
        output.item(&item.name(), item.price());
    }
    output.success(&format!("Total: {}", cart.total()));
}

fn checkout(cart: &Mutex<Cart>, output: &Output) -> Result<()> {
    let carriers: Vec<&str> = Carrier::all().iter().map(|c| c.tag()).collect();
    let carrier = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Carrier")
        .items(&carriers)
        .default(0)
        .interact()?;

    let speeds: Vec<&str> = DeliverySpeed::all().iter().map(|s| s.tag()).collect();
    let speed = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Delivery speed")
        .items(&speeds)
        .default(0)
        .interact()?;

    let methods = &["credit", "paypal"];
    let method = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Payment method")
        .items(methods)
        .default(0)
        .interact()?;

    let mut cart = lock(cart);
    match place_order(&mut cart, carriers[carrier], speeds[speed], methods[method]) {
        Ok(confirmation) => {
            output.heading("Order placed");
            output.info(&confirmation.manifest);
            output.info(&confirmation.eta);
            output.success(&format!(
                "{} charged via {}",
                confirmation.total, confirmation.payment_method
            ));
        }
        Err(err) => output.error(&err.to_string()),
    }
    Ok(())
}

fn confirm(prompt: &str) -> Result<bool> {
    Ok(Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(false)
        .interact()?)
}
