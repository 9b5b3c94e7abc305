fn main() {
    weekly_dashboard_lib::run()
}
