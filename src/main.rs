fn main() -> anyhow::Result<()> {
    exam_scheduler::runner::run()
}
